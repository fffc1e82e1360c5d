use leptos::prelude::*;
use shared::CONFIG;
use shared::format::short_address;

use crate::components::Section;

/// Dashboard index - program overview
#[component]
pub fn DashboardHome() -> impl IntoView {
    let program_short = short_address(CONFIG.program_id, 4);

    view! {
        <Section id="program" title="Program">
            <div>
                <strong>"CLUSTER"</strong> " " {CONFIG.cluster.name()}
            </div>
            <div>
                <strong>"PROGRAM"</strong> " "
                <code title=CONFIG.program_id>{program_short}</code>
            </div>
            <div>
                <strong>"INSTRUCTIONS"</strong> " " {CONFIG.instructions.len()}
            </div>
        </Section>

        <Section id="explorers" title="Explorers">
            <div>
                <a href=CONFIG.explorer_program_url() target="_blank" rel="noopener noreferrer">
                    "solana explorer ↗"
                </a>
            </div>
            <div>
                <a href=CONFIG.solscan_program_url() target="_blank" rel="noopener noreferrer">
                    "solscan ↗"
                </a>
            </div>
        </Section>

        <Section id="pages" title="Pages">
            <a href="/dashboard/vault">"vault program reference"</a>
        </Section>
    }
}
