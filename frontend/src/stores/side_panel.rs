// Right-hand side panel views

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidePanel {
    RecentMentions,
    Flagged,
}

impl SidePanel {
    pub fn title(&self) -> &'static str {
        match self {
            SidePanel::RecentMentions => "Recent Mentions",
            SidePanel::Flagged => "Flagged Posts",
        }
    }

    pub fn empty_text(&self) -> &'static str {
        match self {
            SidePanel::RecentMentions => "No recent mentions.",
            SidePanel::Flagged => "No flagged posts yet.",
        }
    }
}
