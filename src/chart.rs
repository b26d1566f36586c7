// src/chart.rs
//
// CharacterCorpus → Plotly figure (serialized with serde, drawn in the browser).
//
// Layout mirrors a 2×1 subplot grid: the four word-category traces share the
// top axes (only one visible at a time, picked from the dropdown), the
// sentiment trace sits alone on the bottom axes and is always visible.

use serde::Serialize;

use crate::corpus::CharacterCorpus;
use crate::error::Result;
use crate::freq::TokenFrequencyTable;

/// (trace name, dropdown label, bar colour), in trace order.
pub const CATEGORIES: [(&str, &str, &str); 4] = [
    ("All", "All", "#6afcb8"),
    ("Noun", "Nouns", "#6aaefc"),
    ("Verb", "Verbs", "#6e6afc"),
    ("Adjective", "Adjectives", "#fcb86a"),
];

pub const SENTIMENT_TRACE: &str = "Sentiment";

// Subplot geometry: two rows with a gap between.
const TOP_DOMAIN: [f64; 2] = [0.575, 1.0];
const BOTTOM_DOMAIN: [f64; 2] = [0.0, 0.425];

#[derive(Clone, Debug, Serialize)]
pub struct Figure {
    pub data: Vec<BarTrace>,
    pub layout: Layout,
}

#[derive(Clone, Debug, Serialize)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<usize>,
    pub visible: bool,
    pub xaxis: &'static str,
    pub yaxis: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Marker {
    pub color: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct Axis {
    pub domain: [f64; 2],
    pub anchor: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xref: &'static str,
    pub yref: &'static str,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub showarrow: bool,
    pub font: Font,
}

#[derive(Clone, Debug, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct Layout {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub xaxis2: Axis,
    pub yaxis2: Axis,
    pub annotations: Vec<Annotation>,
    pub showlegend: bool,
    pub updatemenus: Vec<UpdateMenu>,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateMenu {
    pub active: usize,
    pub buttons: Vec<Button>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Button {
    pub label: &'static str,
    pub method: &'static str,
    pub args: Vec<VisibleArgs>,
}

#[derive(Clone, Debug, Serialize)]
pub struct VisibleArgs {
    pub visible: Vec<bool>,
}

/// Top `n` words per category plus top `n` sentiments.
pub fn build_chart(corpus: &CharacterCorpus, top_n: usize) -> Result<Figure> {
    let mut data: Vec<BarTrace> = CATEGORIES
        .iter()
        .enumerate()
        .map(|(ix, (name, _, color))| {
            bar(name, corpus.category(ix), top_n, ix == 0, ("x", "y"), Some(Marker { color: *color }))
        })
        .collect();
    data.push(bar(SENTIMENT_TRACE, &corpus.sentiment, top_n, true, ("x2", "y2"), None));

    let layout = Layout {
        xaxis: Axis { domain: [0.0, 1.0], anchor: "y" },
        yaxis: Axis { domain: TOP_DOMAIN, anchor: "x" },
        xaxis2: Axis { domain: [0.0, 1.0], anchor: "y2" },
        yaxis2: Axis { domain: BOTTOM_DOMAIN, anchor: "x2" },
        annotations: vec![
            subplot_title(format!("{}'s Most Common Words", corpus.name), TOP_DOMAIN[1]),
            subplot_title(s!("Most Common Sentiments"), BOTTOM_DOMAIN[1]),
        ],
        showlegend: false,
        updatemenus: vec![UpdateMenu { active: 0, buttons: buttons() }],
    };

    log::debug!("Chart: {} with {} trace(s)", corpus.name, data.len());
    Ok(Figure { data, layout })
}

/// Figure as JSON text, ready for `Plotly.newPlot`.
pub fn to_json(figure: &Figure) -> Result<String> {
    serde_json::to_string(figure).map_err(|e| crate::error::Error::parse(format!("figure JSON: {e}")))
}

fn bar(
    name: &str,
    tokens: &[String],
    top_n: usize,
    visible: bool,
    axes: (&'static str, &'static str),
    marker: Option<Marker>,
) -> BarTrace {
    let (x, y) = TokenFrequencyTable::from_tokens(tokens).top(top_n).into_iter().unzip();
    BarTrace {
        kind: "bar",
        name: s!(name),
        x,
        y,
        visible,
        xaxis: axes.0,
        yaxis: axes.1,
        marker,
    }
}

/// Each button shows its own category and the sentiment trace.
fn buttons() -> Vec<Button> {
    CATEGORIES
        .iter()
        .enumerate()
        .map(|(ix, (_, label, _))| {
            let mut visible: Vec<bool> = (0..CATEGORIES.len()).map(|i| i == ix).collect();
            visible.push(true);
            Button { label: *label, method: "update", args: vec![VisibleArgs { visible }] }
        })
        .collect()
}

fn subplot_title(text: String, y: f64) -> Annotation {
    Annotation {
        text,
        x: 0.5,
        y,
        xref: "paper",
        yref: "paper",
        xanchor: "center",
        yanchor: "bottom",
        showarrow: false,
        font: Font { size: 16 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> CharacterCorpus {
        CharacterCorpus {
            name: s!("Cait"),
            words: cells!["raiders", "whiskey", "raiders", "fight"],
            nouns: cells!["raiders", "whiskey", "raiders"],
            verbs: cells!["fight"],
            adjectives: cells![],
            sentiment: cells!["angry", "amused", "angry"],
            ..Default::default()
        }
    }

    #[test]
    fn five_traces_only_all_and_sentiment_visible() {
        let fig = build_chart(&corpus(), 10).unwrap();
        let names: Vec<_> = fig.data.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["All", "Noun", "Verb", "Adjective", "Sentiment"]);
        let visible: Vec<_> = fig.data.iter().map(|t| t.visible).collect();
        assert_eq!(visible, vec![true, false, false, false, true]);
        assert_eq!(fig.data[4].xaxis, "x2");
        assert_eq!(fig.data[0].x, cells!["raiders", "whiskey", "fight"]);
        assert_eq!(fig.data[0].y, vec![2, 1, 1]);
    }

    #[test]
    fn buttons_show_their_own_category() {
        let fig = build_chart(&corpus(), 10).unwrap();
        let buttons = &fig.layout.updatemenus[0].buttons;
        let labels: Vec<_> = buttons.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["All", "Nouns", "Verbs", "Adjectives"]);
        for (ix, b) in buttons.iter().enumerate() {
            let vis = &b.args[0].visible;
            assert_eq!(vis.len(), 5);
            assert!(vis[ix]);
            assert!(vis[4]);
            assert_eq!(vis.iter().filter(|v| **v).count(), 2);
            // the visible word trace matches the button label
            assert!(fig.data[ix].name.starts_with(&b.label[..3]));
        }
    }

    #[test]
    fn empty_lists_give_zero_bar_traces() {
        let c = CharacterCorpus { name: s!("Nobody"), ..Default::default() };
        let fig = build_chart(&c, 10).unwrap();
        assert!(fig.data.iter().all(|t| t.x.is_empty() && t.y.is_empty()));
    }

    #[test]
    fn titles_and_legend() {
        let fig = build_chart(&corpus(), 10).unwrap();
        let titles: Vec<_> = fig.layout.annotations.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(titles, vec!["Cait's Most Common Words", "Most Common Sentiments"]);
        assert!(!fig.layout.showlegend);
    }

    #[test]
    fn json_shape() {
        let json = to_json(&build_chart(&corpus(), 2).unwrap()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["data"][0]["type"], "bar");
        assert_eq!(v["data"][0]["marker"]["color"], "#6afcb8");
        assert!(v["data"][4].get("marker").is_none());
        assert_eq!(v["data"][0]["x"].as_array().unwrap().len(), 2);
        assert_eq!(v["layout"]["updatemenus"][0]["buttons"][2]["args"][0]["visible"][2], true);
    }
}
