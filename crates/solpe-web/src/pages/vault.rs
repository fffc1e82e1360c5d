use leptos::prelude::*;
use shared::CONFIG;
use shared::format::seed_le_hex;

use crate::components::Section;

const EXAMPLE_SEED: u64 = 42;

/// Vault program reference - instructions and PDA layout
#[component]
pub fn VaultPage() -> impl IntoView {
    let seed_example = format!(
        "seed {} → [\"{}\", 0x{}]",
        EXAMPLE_SEED,
        CONFIG.vault_seed_prefix,
        seed_le_hex(EXAMPLE_SEED)
    );

    view! {
        <Section id="instructions" title="Instructions">
            {CONFIG.instructions.iter().map(|ix| view! {
                <div>
                    <code class="font-bold">{format!("{}({})", ix.name, ix.args.join(", "))}</code>
                    <p class="text-[var(--ink-light)]">{ix.summary}</p>
                </div>
            }).collect_view()}
        </Section>

        <Section id="state" title="Vault State">
            <p>
                "Each vault is a PDA of the program, seeded with the "
                <code>{format!("\"{}\"", CONFIG.vault_seed_prefix)}</code>
                " prefix followed by the little-endian bytes of its u64 seed."
            </p>
            <p class="font-mono text-sm">{seed_example}</p>
        </Section>

        <a href="/dashboard">"← back to dashboard"</a>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_lists_instructions_in_order() {
        let html = view! { <VaultPage /> }.to_html();

        let initialize = html.find("initialize").expect("initialize missing");
        let deposit = html.find("deposit").expect("deposit missing");
        let cancel = html.find("cancel").expect("cancel missing");
        assert!(initialize < deposit && deposit < cancel, "{html}");
        assert!(html.contains("initialize(seed: u64, initializer_amount: u64, taker_amount: u64)"));
    }

    #[test]
    fn test_signature_without_args() {
        let html = view! { <VaultPage /> }.to_html();

        assert!(html.contains(r#"<code class="font-bold">deposit()</code>"#), "{html}");
        assert!(html.contains(r#"<code class="font-bold">cancel()</code>"#));
    }

    #[test]
    fn test_seed_layout() {
        let html = view! { <VaultPage /> }.to_html();

        assert!(html.contains("2a00000000000000"));
        assert!(html.contains(r#"href="/dashboard""#));
    }
}
