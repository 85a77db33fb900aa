// Advanced Settings Page - opt-in pre-release features

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::stores::preferences::PreReleaseFeature;
use crate::stores::use_client;

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let client = use_client();

    html! {
        <div class="p-6 max-w-2xl">
            <h1 class="text-2xl font-bold text-white">{"Advanced Settings"}</h1>
            <p class="text-gray-400 text-sm mt-1 mb-6">
                {"Preview features may change or be removed. Settings are stored in this browser."}
            </p>

            <div class="space-y-3">
                { for PreReleaseFeature::all().into_iter().map(|feature| {
                    let set_feature = client.set_feature.clone();
                    let onchange = Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        set_feature.emit((feature, input.checked()));
                    });

                    html! {
                        <label key={feature.label()} class="flex items-center space-x-3 text-gray-200">
                            <input
                                type="checkbox"
                                checked={client.is_feature_enabled(feature)}
                                {onchange}
                            />
                            <span>{feature.description()}</span>
                        </label>
                    }
                }) }
            </div>
        </div>
    }
}
