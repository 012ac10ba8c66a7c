//! Builds the page for the selected recipe
//!
//! Each recipe constructs its own sample data and turns it into display
//! blocks. Nothing is shared between recipes except widget values held in
//! the [`Session`].

use std::borrow::Cow;

use tracing::error;

use super::chart::{self, Chart, Mark, Panel, Series};
use super::dataset::birdstrike_labels;
use super::describe::describe;
use super::emoji::emojize;
use super::error::Result;
use super::frame::{Column, DataFrame};
use super::lineplot;
use super::page::{Block, Inline, Page, WidgetId};
use super::recipe::Recipe;
use super::session::Session;
use super::style::{color_negative, StyledTable};
use super::wordcloud::WordCloud;

pub const WORDCLOUD_TEXT: &str = "Fun, fun, awesome, awesome, tubular, astounding, superb, \
                                  great, amazing, amazing, amazing, amazing";

pub const EMOJI_TEXT: &str = "Showing :heart: for Streamlit :raised_hands:";

/// Build the page for `recipe`. Failures become an inline error block.
pub fn build_page(recipe: Recipe, session: &mut Session) -> Page {
    let built = match recipe {
        Recipe::Description => description(),
        Recipe::DataframeFormatting => dataframe_formatting(session),
        Recipe::SideBySideCharts => side_by_side_charts(),
        Recipe::SelectRows => select_rows(session),
        Recipe::RangeSlider => range_slider(session),
        Recipe::AdvancedSelectbox => advanced_selectbox(session),
        Recipe::Seaborn => seaborn(session),
        Recipe::Wordcloud => wordcloud(session),
        Recipe::Emojis => emojis(),
    };

    let mut page = Page::new(recipe);
    match built {
        Ok(blocks) => page.blocks = blocks,
        Err(e) => {
            error!("Recipe {} failed: {}", recipe, e);
            page.push(Block::heading(2, recipe.label()));
            page.push(Block::Error(e.to_string()));
        }
    }
    page
}

fn description() -> Result<Vec<Block>> {
    Ok(vec![
        Block::heading(2, "Cookbook"),
        Block::paragraph(emojize(
            "Here are a few code snippets and examples of common functionality \
             people like to add to their apps. :balloon:",
        )),
        Block::Bullets(vec![
            vec![
                Inline::text("To see the full functionality of egui, check out the "),
                Inline::link("documentation", "https://docs.rs/egui"),
                Inline::text("."),
            ],
            vec![
                Inline::text("Need help? Stop by the "),
                Inline::link("egui discussions", "https://github.com/emilk/egui/discussions"),
                Inline::text(" and say hello!"),
            ],
            vec![
                Inline::text("Have an example you'd like to share? "),
                Inline::link(
                    "Submit a pull request on GitHub",
                    "https://github.com/kellyamanda/cookbook",
                ),
                Inline::text("!"),
            ],
        ]),
    ])
}

fn dataframe_formatting(session: &Session) -> Result<Vec<Block>> {
    let mut blocks = vec![
        Block::heading(2, "Formatting Dataframes"),
        Block::Paragraph(vec![
            Inline::text("Use "),
            Inline::Code("StyledTable::applymap".into()),
            Inline::text(" to change the style of each cell in a rendered table."),
        ]),
        Block::code(
            r#"
let df = DataFrame::random_normal(3, 5, seed);

fn color_negative(cell: &Cell) -> CellStyle {
    match cell.as_f64() {
        Some(v) if v < 0.0 => CellStyle::background(Rgb::RED),
        _ => CellStyle::background(Rgb::BLACK),
    }
}

let df_color = StyledTable::applymap(df, color_negative);
"#,
        ),
    ];

    let df = DataFrame::random_normal(3, 5, session.seed);
    blocks.push(Block::Table {
        caption: None,
        table: StyledTable::applymap(df, color_negative),
    });
    Ok(blocks)
}

fn side_by_side_charts() -> Result<Vec<Block>> {
    let mut blocks = vec![
        Block::heading(2, "Side-by-side charts"),
        Block::paragraph(
            "Lay charts out horizontally either by faceting one chart on a column \
             or by placing several axes at fixed fractions of the chart width.",
        ),
        Block::heading(3, "Faceted example"),
        Block::code(
            r#"
let df = DataFrame::new(vec![
    Column::texts("year", &["2010", "2011", "2010", "2011"]),
    Column::texts("animal", &["antelope", "antelope", "velociraptor", "velociraptor"]),
    Column::ints("count", &[8, 6, 2, 4]),
])?;

let side_by_side_chart = chart::facet_bar(&df, "animal", "count", "year", 200.0, 200.0)?;
"#,
        ),
    ];

    let df = DataFrame::new(vec![
        Column::texts("year", &["2010", "2011", "2010", "2011"]),
        Column::texts(
            "animal",
            &["antelope", "antelope", "velociraptor", "velociraptor"],
        ),
        Column::ints("count", &[8, 6, 2, 4]),
    ])?;
    blocks.push(Block::Chart(chart::facet_bar(
        &df, "animal", "count", "year", 200.0, 200.0,
    )?));

    blocks.push(Block::heading(3, "Multiple axes example"));
    blocks.push(Block::code(
        r#"
// Simple line trace
let scatter = Series::numeric("trace 0", Mark::Line, &[5.0, 20.0, 35.0], &[30.0, 20.0, 10.0]);

// Simple bar trace
let bar = Series::categorical(
    "trace 1",
    Mark::Bar,
    &["velociraptor_2010", "velociraptor_2011", "velociraptor_2012", "velociraptor_2013"],
    &[5.0, 8.0, 11.0, 14.0],
);

let fig = Chart::new(640.0, 320.0)
    .with_panel(Panel::new([0.0, 0.45]).with_series(scatter))
    .with_panel(Panel::new([0.55, 1.0]).with_series(bar));
"#,
    ));

    let scatter = Series::numeric(
        "trace 0",
        Mark::Line,
        &[5.0, 20.0, 35.0],
        &[30.0, 20.0, 10.0],
    );
    let bar = Series::categorical(
        "trace 1",
        Mark::Bar,
        &[
            "velociraptor_2010",
            "velociraptor_2011",
            "velociraptor_2012",
            "velociraptor_2013",
        ],
        &[5.0, 8.0, 11.0, 14.0],
    );
    blocks.push(Block::Chart(
        Chart::new(640.0, 320.0)
            .with_panel(Panel::new([0.0, 0.45]).with_series(scatter))
            .with_panel(Panel::new([0.55, 1.0]).with_series(bar)),
    ));

    Ok(blocks)
}

/// The four-row table used by the row selection recipe
pub fn events_table() -> Result<DataFrame> {
    DataFrame::new(vec![
        Column::texts(
            "date",
            &["2019-08-01", "2019-08-01", "2019-08-02", "2019-08-02"],
        ),
        Column::texts("users", &["Sara", "James", "Sara", "James"]),
        Column::texts("events", &["3", "2", "5", "1"]),
    ])
}

fn select_rows(session: &mut Session) -> Result<Vec<Block>> {
    let df = events_table()?;
    session.rows.set_options(df.index().to_vec());
    let selected = df.loc(session.rows.selected())?;

    Ok(vec![
        Block::heading(2, "Select rows in a table"),
        Block::paragraph(
            "Tables are not directly editable yet. In the meantime, use a multiselect \
             to pick specific rows by index.",
        ),
        Block::Table {
            caption: Some("Full Dataset".into()),
            table: StyledTable::plain(df),
        },
        Block::MultiSelect {
            id: WidgetId::Rows,
            label: "Select rows:".into(),
            options: session
                .rows
                .options()
                .iter()
                .map(|i| (*i, i.to_string()))
                .collect(),
            selected: session.rows.selected().to_vec(),
        },
        Block::Table {
            caption: Some("Selected Rows".into()),
            table: StyledTable::plain(selected),
        },
    ])
}

fn range_slider(session: &Session) -> Result<Vec<Block>> {
    let (lo, hi) = session.range.value();
    Ok(vec![
        Block::heading(2, "Range slider"),
        Block::paragraph("Create a range slider by giving the widget a two-element value."),
        Block::code(
            r#"
let values = RangeSelection::new(0.0, 100.0, (25.0, 75.0));

page.push(Block::Value {
    label: Some("Selected values:".into()),
    value: format!("{:?}", values.value()),
});
"#,
        ),
        Block::RangeSlider {
            id: WidgetId::ValueRange,
            label: "Select a range of values".into(),
            range: session.range,
        },
        Block::Value {
            label: Some("Selected values:".into()),
            value: format!("({:.1}, {:.1})", lo, hi),
        },
    ])
}

fn advanced_selectbox(session: &mut Session) -> Result<Vec<Block>> {
    let mut blocks = vec![
        Block::heading(2, "Advanced selectbox functionality"),
        Block::Paragraph(vec![
            Inline::text("Pass a label function to "),
            Inline::Code("SelectBox::labels".into()),
            Inline::text(" to offer complex values and choose what shows in the UI."),
        ]),
        Block::heading(3, "Example 1"),
        Block::code(
            r#"
let display = ["male", "female"];

let options: Vec<usize> = (0..display.len()).collect();

let value = SelectBox::new(options);
let labels = value.labels(|x| Cow::Borrowed(display[*x]));

page.push(Block::value(value.index().to_string()));
"#,
        ),
    ];

    let display = ["male", "female"];
    let labels = session
        .gender
        .labels(|x| Cow::Borrowed(display.get(*x).copied().unwrap_or_default()))
        .into_iter()
        .map(Cow::into_owned)
        .collect();
    blocks.push(Block::SelectBox {
        id: WidgetId::Gender,
        label: "gender".into(),
        labels,
        index: session.gender.index(),
    });
    if let Some(value) = session.gender.value() {
        blocks.push(Block::value(value.to_string()));
    }

    blocks.push(Block::heading(3, "Example 2"));
    blocks.push(Block::code(
        r#"
// Loaded once per source, then served from the cache
let dataset = session.datasets.get_or_load(&DatasetSource::Bundled)?;

let cols = LabelMap::new(&[
    ("Airport Name", "Airport Name"),
    ("Aircraft Make Model", "Aircraft Make & Model"),
    // ...
    ("Speed IAS in knots", "Speed (in Knots)"),
]);

let column = SelectBox::new(dataset.column_names());
let labels = column.labels(|name| cols.label(name));

if let Some(name) = column.value() {
    page.push(Block::Summary(describe(dataset.column(name)?)));
}
"#,
    ));
    blocks.push(Block::DatasetPicker {
        current: session.dataset.clone(),
        recent: session.recent_datasets.clone(),
    });

    let source = session.dataset.clone();
    let dataset = match session.datasets.get_or_load(&source) {
        Ok(dataset) => dataset,
        Err(e) => {
            blocks.push(Block::Error(e.to_string()));
            return Ok(blocks);
        }
    };

    let cols = birdstrike_labels();
    session.column.set_options(
        dataset
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    );
    let labels = session
        .column
        .labels(|name| cols.label(name))
        .into_iter()
        .map(Cow::into_owned)
        .collect();
    blocks.push(Block::SelectBox {
        id: WidgetId::DescribeColumn,
        label: "Describe Column".into(),
        labels,
        index: session.column.index(),
    });

    if let Some(name) = session.column.value() {
        blocks.push(Block::Summary(describe(dataset.column(name)?)));
    }
    Ok(blocks)
}

fn seaborn(session: &Session) -> Result<Vec<Block>> {
    let df = DataFrame::new(vec![
        Column::ints("x", &[1, 2, 3]),
        Column::ints("y", &[10, 30, 70]),
    ])?;
    let panel = lineplot::lineplot(&df, "x", "y")?;
    let (width, height) = session.plot_size;
    let image = lineplot::rasterize(&panel, width, height)?;

    Ok(vec![
        Block::heading(2, "Static plots"),
        Block::paragraph(
            "A plot can be rasterized into an image buffer and displayed like any other picture:",
        ),
        Block::code(
            r#"
let df = DataFrame::new(vec![
    Column::ints("x", &[1, 2, 3]),
    Column::ints("y", &[10, 30, 70]),
])?;
let plot = lineplot::lineplot(&df, "x", "y")?;
let image = lineplot::rasterize(&plot, width, height)?;
"#,
        ),
        Block::Image {
            caption: "y against x".into(),
            image,
        },
    ])
}

fn wordcloud(session: &Session) -> Result<Vec<Block>> {
    let cloud = WordCloud::generate(WORDCLOUD_TEXT, &session.wordcloud)?;
    Ok(vec![
        Block::heading(2, "Create a Wordcloud"),
        Block::paragraph("Count the words of a text and lay them out as a simple word cloud."),
        Block::code(
            r#"
let text = "Fun, fun, awesome, awesome, tubular, astounding, superb, great, amazing, amazing, amazing, amazing";

// Create and generate a word cloud:
let wordcloud = WordCloud::generate(text, &WordCloudOptions::default())?;
"#,
        ),
        Block::WordCloud(cloud),
    ])
}

fn emojis() -> Result<Vec<Block>> {
    Ok(vec![
        Block::heading(2, "Emojis"),
        Block::paragraph(
            "Write shortcodes between colons and they are replaced by the matching emoji.",
        ),
        Block::code(
            r#"
page.push(Block::paragraph(emojize("Showing :heart: for Streamlit :raised_hands:")));
"#,
        ),
        Block::paragraph(emojize(EMOJI_TEXT)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frame::Cell;
    use crate::core::page::WidgetEvent;
    use crate::core::settings::Settings;
    use crate::core::widgets::NO_LABEL;

    fn session() -> Session {
        Session::new(&Settings::default(), Vec::new())
    }

    #[test]
    fn test_every_recipe_builds_a_page_with_output() {
        let mut s = session();
        for &recipe in Recipe::all() {
            let page = build_page(recipe, &mut s);
            assert_eq!(page.recipe, recipe);
            assert_eq!(page.errors().count(), 0, "{} failed", recipe);
            assert!(page.artifacts().count() >= 1, "{} shows nothing", recipe);
        }
    }

    #[test]
    fn test_rebuilding_is_idempotent() {
        let mut s = session();
        s.apply(WidgetEvent::ToggleOption {
            id: WidgetId::Rows,
            option: 1,
        });
        for &recipe in Recipe::all() {
            let first = build_page(recipe, &mut s);
            let second = build_page(recipe, &mut s);
            assert_eq!(first, second, "{} changed between passes", recipe);
        }
    }

    #[test]
    fn test_dataset_is_loaded_once_across_passes() {
        let mut s = session();
        build_page(Recipe::AdvancedSelectbox, &mut s);
        build_page(Recipe::AdvancedSelectbox, &mut s);
        assert_eq!(s.datasets.loads(), 1);
    }

    #[test]
    fn test_negative_cells_are_red() {
        let mut s = session();
        let page = build_page(Recipe::DataframeFormatting, &mut s);
        let table = page
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { table, .. } => Some(table),
                _ => None,
            })
            .unwrap();

        assert_eq!(table.frame.height(), 3);
        assert_eq!(table.frame.width(), 5);
        for (c, column) in table.frame.columns().iter().enumerate() {
            for (r, cell) in column.cells.iter().enumerate() {
                let negative = cell.as_f64().unwrap() < 0.0;
                let expected = color_negative(&Cell::Float(if negative { -1.0 } else { 1.0 }));
                assert_eq!(table.style(c, r), expected);
            }
        }
    }

    #[test]
    fn test_selected_rows_follow_multiselect() {
        let mut s = session();
        build_page(Recipe::SelectRows, &mut s);
        for option in [0, 2] {
            s.apply(WidgetEvent::ToggleOption {
                id: WidgetId::Rows,
                option,
            });
        }

        let page = build_page(Recipe::SelectRows, &mut s);
        let tables: Vec<_> = page
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Table { table, .. } => Some(&table.frame),
                _ => None,
            })
            .collect();
        let full = tables[0];
        let picked = tables[1];

        assert_eq!(picked.index(), &[0, 2]);
        assert_eq!(picked.column_names(), full.column_names());
        assert_eq!(picked.column("users").unwrap().cells, vec![
            Cell::text("Sara"),
            Cell::text("Sara"),
        ]);
        assert_eq!(picked.column("events").unwrap().cells, vec![
            Cell::text("3"),
            Cell::text("5"),
        ]);
    }

    #[test]
    fn test_range_page_echoes_value() {
        let mut s = session();
        s.apply(WidgetEvent::SetRangeLow(10.0));
        let page = build_page(Recipe::RangeSlider, &mut s);
        assert!(page.blocks.contains(&Block::Value {
            label: Some("Selected values:".into()),
            value: "(10.0, 75.0)".into(),
        }));
    }

    #[test]
    fn test_selectbox_pages_show_mapped_labels() {
        let mut s = session();
        s.apply(WidgetEvent::Select {
            id: WidgetId::Gender,
            index: 1,
        });
        let page = build_page(Recipe::AdvancedSelectbox, &mut s);

        let selects: Vec<_> = page
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::SelectBox { labels, index, .. } => Some((labels, *index)),
                _ => None,
            })
            .collect();
        assert_eq!(selects[0].0, &vec!["male".to_string(), "female".to_string()]);
        assert_eq!(selects[0].1, 1);
        assert!(page.blocks.contains(&Block::value("1")));

        let column_labels = selects[1].0;
        assert!(column_labels.contains(&"Cost (Total) ($)".to_string()));
        assert!(!column_labels.iter().any(|l| l == NO_LABEL));
        assert!(page.blocks.iter().any(|b| matches!(b, Block::Summary(_))));
    }

    #[test]
    fn test_unknown_dataset_column_gets_placeholder_label() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"Remarks,Cost Repair\nnone,10\n").unwrap();

        let mut s = session();
        s.apply(WidgetEvent::OpenDataset(file.path().to_path_buf()));
        let page = build_page(Recipe::AdvancedSelectbox, &mut s);

        let labels = page
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::SelectBox {
                    id: WidgetId::DescribeColumn,
                    labels,
                    ..
                } => Some(labels.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(labels, vec![NO_LABEL.to_string(), "Cost (Repair)".to_string()]);
    }

    #[test]
    fn test_missing_dataset_is_shown_inline() {
        let mut s = session();
        s.apply(WidgetEvent::OpenDataset("/nonexistent/strikes.csv".into()));
        let page = build_page(Recipe::AdvancedSelectbox, &mut s);
        assert_eq!(page.errors().count(), 1);
        // Example 1 still renders.
        assert!(page.blocks.contains(&Block::value("0")));
    }

    #[test]
    fn test_wordcloud_and_emoji_output() {
        let mut s = session();
        let page = build_page(Recipe::Wordcloud, &mut s);
        let cloud = page
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::WordCloud(c) => Some(c),
                _ => None,
            })
            .unwrap();
        assert!(!cloud.is_empty());

        let page = build_page(Recipe::Emojis, &mut s);
        assert!(page
            .blocks
            .contains(&Block::paragraph("Showing ❤️ for Streamlit 🙌")));
    }

    #[test]
    fn test_seaborn_image_matches_plot_size() {
        let mut s = session();
        let page = build_page(Recipe::Seaborn, &mut s);
        let image = page
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Image { image, .. } => Some(image),
                _ => None,
            })
            .unwrap();
        assert_eq!(image.dimensions(), s.plot_size);
    }
}
