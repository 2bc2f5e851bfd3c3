use yew::prelude::*;

use crate::content::PriceEntry;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct PriceTableProps {
    pub entries: &'static [PriceEntry],
}

/// Label on the left, price on the right, a rule between rows.
#[function_component(PriceTable)]
pub fn price_table(props: &PriceTableProps) -> Html {
    let palette = use_context::<Theme>().unwrap_or_default().palette;
    let last = props.entries.len().saturating_sub(1);

    html! {
        <div style="display: flex; flex-direction: column; gap: 16px;">
            { for props.entries.iter().enumerate().map(|(i, entry)| {
                let divider = if i < last {
                    format!("padding-bottom: 12px; border-bottom: 1px solid {};", palette.line)
                } else {
                    String::new()
                };
                html! {
                    <div
                        style={format!("display: flex; justify-content: space-between; align-items: center; {}", divider)}
                        data-price={entry.label}
                    >
                        <span style={format!("font-size: 15px; color: {};", palette.muted)}>{ entry.label }</span>
                        <span style={format!("font-size: 15px; font-family: monospace; color: {};", palette.accent)}>
                            { entry.price }
                        </span>
                    </div>
                }
            }) }
        </div>
    }
}
