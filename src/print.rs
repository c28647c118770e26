//! Console rendering of a forecast.

use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use crate::domain::{Prediction, Winner};
use crate::market::multiply_capped;

/// Lays out the calibrated probabilities alongside fair and quoted prices, one row per
/// outcome. Values are rounded for presentation only.
pub fn tabulate(prediction: &Prediction) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Outcome".into(),
                "Probability".into(),
                "Fair price".into(),
                "Market odds".into(),
            ],
        ));

    for outcome in Winner::iter() {
        let probability = match outcome {
            Winner::Home => prediction.probs.home,
            Winner::Draw => prediction.probs.draw,
            Winner::Away => prediction.probs.away,
        };
        let quoted = prediction.odds.map(|odds| match outcome {
            Winner::Home => odds.home,
            Winner::Draw => odds.draw,
            Winner::Away => odds.away,
        });
        table.push_row(Row::new(
            Styles::default(),
            vec![
                outcome.to_string().into(),
                format!("{probability:.2}").into(),
                format!("{:.3}", multiply_capped(1.0 / probability, 1.0)).into(),
                quoted
                    .map(|price| format!("{price:.2}"))
                    .unwrap_or_else(|| "-".into())
                    .into(),
            ],
        ));
    }

    table
}
