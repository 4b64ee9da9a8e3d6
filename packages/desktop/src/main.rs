use dioxus::prelude::*;

fn main() {
    // Allow KNOWLEDGE_HUB__* overrides from a local .env file
    dotenvy::dotenv().ok();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Knowledge Hub" }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::AuthProvider {
            ui::SessionGate {}
        }
    }
}
