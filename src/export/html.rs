//! `index.html` for the static export.
//!
//! The model selector is a plain CSS radio group: each variant's SVG sits in
//! its own panel and only the panel of the checked radio is displayed, so the
//! page works without scripts.

use std::fmt::Write as _;

use crate::config::SiteConfig;
use crate::content::{self, Accent, PointKind, CHECKLIST, COLUMN_TITLES, DECISION_STAGES, SOFTWARE};
use crate::model::ModelVariant;
use crate::page::Section;
use crate::render::svg::{escape_xml_attr as attr, escape_xml_text as text};

pub const HERO_ASSET: &str = "assets/hero.svg";

/// Path of a variant's standalone SVG, relative to the base path.
pub fn model_asset(variant: ModelVariant) -> String {
    format!("models/{}.svg", variant.slug())
}

const PAGE_STYLES: &str = r#"
:root { --blue: #0D232C; --orange: #F18C22; --green: #87CBCC; --cream: #F9F8F4; }
* { box-sizing: border-box; }
html { scroll-behavior: smooth; scroll-padding-top: 100px; }
body { margin: 0; font-family: "Inter", "Helvetica Neue", Arial, sans-serif; color: var(--blue); background: var(--cream); }
header { position: sticky; top: 0; z-index: 10; display: flex; justify-content: space-between; align-items: center; padding: 16px 32px; background: rgba(255, 255, 255, 0.9); }
header .brand { font-weight: 700; letter-spacing: 0.05em; }
header .brand .mark { display: inline-block; width: 32px; height: 32px; line-height: 32px; text-align: center; border-radius: 50%; background: var(--blue); color: var(--orange); margin-right: 8px; }
header nav a { margin-left: 24px; color: var(--blue); text-decoration: none; font-size: 14px; }
header nav a.cta { padding: 8px 16px; border-radius: 999px; background: var(--blue); color: #FFFFFF; }
section { padding: 80px 32px; max-width: 1100px; margin: 0 auto; }
.kicker { color: var(--orange); font-weight: 700; letter-spacing: 0.15em; text-transform: uppercase; font-size: 12px; }
.hero { text-align: center; }
.hero img { width: 100%; max-width: 960px; border-radius: 16px; }
.decision { display: flex; gap: 16px; align-items: stretch; }
.stage { flex: 1; padding: 16px; border-radius: 12px; background: #FFFFFF; text-align: center; }
.stage.flagged { border: 1px solid var(--orange); }
.stage.emphasized { background: var(--blue); color: #FFFFFF; }
.problem { background: #FEF2F2; } .solution { background: #EFF6FF; }
.cfa-models input { position: absolute; opacity: 0; }
.cfa-models label { display: inline-block; padding: 10px 16px; margin: 4px; border-radius: 8px; background: #FFFFFF; cursor: pointer; }
.cfa-panel { display: none; }
#model-correlated:checked ~ .cfa-panels .cfa-panel-correlated,
#model-bifactor:checked ~ .cfa-panels .cfa-panel-bifactor,
#model-second-order:checked ~ .cfa-panels .cfa-panel-second-order { display: block; }
#model-correlated:checked ~ label[for=model-correlated],
#model-bifactor:checked ~ label[for=model-bifactor],
#model-second-order:checked ~ label[for=model-second-order] { background: var(--blue); color: #FFFFFF; }
.cfa-checklist { list-style: none; padding: 0; }
.cfa-step { margin: 24px 0; padding: 24px; border-radius: 12px; background: #FFFFFF; }
.cfa-step .columns { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
.software { display: grid; grid-template-columns: repeat(2, 1fr); gap: 24px; }
.card { padding: 24px; border-radius: 12px; background: #FFFFFF; }
.card.green { border-top: 4px solid var(--green); } .card.orange { border-top: 4px solid var(--orange); }
footer { padding: 48px 32px; background: var(--blue); color: #FFFFFF; text-align: center; }
footer a { color: var(--green); }
@media (max-width: 767px) { header nav a:not(.cta) { display: none; } .decision, .cfa-step .columns, .software { display: block; } }
"#;

/// Render the whole page. `diagrams` holds one SVG document per variant.
pub fn render_index(config: &SiteConfig, diagrams: &[(ModelVariant, String)]) -> String {
    let mut out = String::with_capacity(64 * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<base href=\"{}\">", attr(config.base_path()));
    let _ = writeln!(out, "<title>{} | {}</title>", text(content::PAPER_CITATION), text(content::PAPER_TITLE));
    let _ = writeln!(out, "<style>{}</style>\n</head>\n<body id=\"top\">", PAGE_STYLES);

    write_header(&mut out, config);
    write_hero(&mut out);
    write_introduction(&mut out);
    write_models(&mut out, diagrams);
    write_guidelines(&mut out);
    write_software(&mut out);
    write_footer(&mut out, config);

    out.push_str("</body>\n</html>\n");
    out
}

fn write_header(out: &mut String, config: &SiteConfig) {
    let _ = writeln!(
        out,
        "<header><a class=\"brand\" href=\"#top\"><span class=\"mark\">{}</span>{} <small>{}</small></a><nav>",
        text(content::BRAND_MARK),
        text(content::BRAND_TITLE),
        text(content::BRAND_SUBTITLE)
    );
    for s in Section::ALL {
        let _ = write!(out, "<a href=\"#{}\">{}</a>", s.anchor(), text(s.title()));
    }
    let _ = writeln!(
        out,
        "<a class=\"cta\" href=\"{}\" target=\"_blank\" rel=\"noopener\">Read Paper</a></nav></header>",
        attr(config.paper_url().as_str())
    );
}

fn write_hero(out: &mut String) {
    let _ = writeln!(
        out,
        "<section class=\"hero\"><p class=\"kicker\">{}</p><h1>{}<br>{}</h1><p>{}</p><p><em>{}</em></p>",
        text(content::HERO_KICKER),
        text(content::HERO_TITLE[0]),
        text(content::HERO_TITLE[1]),
        text(content::HERO_SUBTITLE),
        text(content::HERO_CREDIT)
    );
    let _ = writeln!(
        out,
        "<img src=\"{}\" alt=\"Four-factor model\"><p><a href=\"#{}\">{}</a></p></section>",
        HERO_ASSET,
        Section::Introduction.anchor(),
        text(content::HERO_CTA)
    );
}

fn write_introduction(out: &mut String) {
    let _ = writeln!(
        out,
        "<section id=\"{}\"><p class=\"kicker\">{}</p><h2>{}</h2><p>{}</p>",
        Section::Introduction.anchor(),
        text(content::INTRO_KICKER),
        text(content::INTRO_TITLE),
        text(content::INTRO_LEAD)
    );
    let _ = writeln!(out, "<h3>{}</h3><p>{}</p>", text(content::WHY_TITLE), text(content::WHY_BODY));
    for (problem, label, body) in content::WHY_POINTS {
        let _ = writeln!(
            out,
            "<p class=\"{}\"><strong>{}</strong> {}</p>",
            if problem { "problem" } else { "solution" },
            text(label),
            text(body)
        );
    }

    let _ = writeln!(out, "<h3>{}</h3><div class=\"decision\">", text(content::DECISION_TITLE));
    for stage in &DECISION_STAGES {
        let mut class = String::from("stage");
        if stage.flagged {
            class.push_str(" flagged");
        }
        if stage.emphasized {
            class.push_str(" emphasized");
        }
        let _ = write!(out, "<div class=\"{}\"><p class=\"kicker\">{}</p>", class, text(stage.caption));
        for line in stage.lines {
            let _ = write!(out, "<div>{}</div>", text(line));
        }
        if let Some(note) = stage.note {
            let _ = write!(out, "<small>{}</small>", text(note));
        }
        out.push_str("</div>\n");
    }
    let _ = writeln!(out, "</div><p><small>{}</small></p></section>", text(content::DECISION_FOOTNOTE));
}

fn write_models(out: &mut String, diagrams: &[(ModelVariant, String)]) {
    let _ = writeln!(
        out,
        "<section id=\"{}\"><p class=\"kicker\">{}</p><h2>{}</h2><p>{}</p>",
        Section::Models.anchor(),
        text(content::MODELS_KICKER),
        text(content::MODELS_TITLE),
        text(content::MODELS_LEAD)
    );
    let _ = writeln!(out, "<div class=\"cfa-models\"><h3>{}</h3>", text(content::MODELS_SELECT_TITLE));

    // Radios must precede the panels for the sibling selectors to match.
    let default = ModelVariant::default();
    for (variant, _) in diagrams {
        let slug = variant.slug();
        let _ = writeln!(
            out,
            "<input type=\"radio\" name=\"cfa-model\" id=\"model-{slug}\" value=\"{slug}\"{}>\
             <label for=\"model-{slug}\">{} {}</label>",
            if *variant == default { " checked" } else { "" },
            text(variant.glyph()),
            text(variant.title()),
            slug = slug,
        );
    }

    out.push_str("<div class=\"cfa-panels\">\n");
    for (variant, svg) in diagrams {
        let _ = writeln!(
            out,
            "<div class=\"cfa-panel cfa-panel-{}\"><p>{}</p>{}</div>",
            variant.slug(),
            text(variant.blurb()),
            svg
        );
    }
    out.push_str("</div></div></section>\n");
}

fn write_guidelines(out: &mut String) {
    let _ = writeln!(
        out,
        "<section id=\"{}\"><p class=\"kicker\">{}</p><h2>{}</h2><p>{}</p><ol class=\"cfa-checklist\">",
        Section::Guidelines.anchor(),
        text(content::GUIDELINES_KICKER),
        text(content::GUIDELINES_TITLE),
        text(content::GUIDELINES_LEAD)
    );
    for step in &CHECKLIST {
        let _ = write!(
            out,
            "<li class=\"cfa-step\" data-step=\"{}\"><h3><span>{}</span> {}. {}</h3><div class=\"columns\">",
            step.ordinal,
            text(step.icon.glyph()),
            step.ordinal,
            text(step.title)
        );
        for (title, items) in COLUMN_TITLES.iter().zip(step.columns()) {
            let _ = write!(out, "<div><h4>{}</h4><ul>", text(title));
            for item in items {
                let _ = write!(out, "<li>{}</li>", text(item));
            }
            out.push_str("</ul></div>");
        }
        out.push_str("</div></li>\n");
    }
    out.push_str("</ol></section>\n");
}

fn write_software(out: &mut String) {
    let _ = writeln!(
        out,
        "<section id=\"{}\"><h2>{}</h2><div class=\"software\">",
        Section::Software.anchor(),
        text(Section::Software.title())
    );
    for card in &SOFTWARE {
        let accent = match card.accent {
            Accent::Green => "green",
            Accent::Orange => "orange",
        };
        let _ = write!(
            out,
            "<div class=\"card {}\"><h3>{} <small>{}</small></h3><p>{}</p><ul>",
            accent,
            text(card.name),
            text(card.badge),
            text(card.description)
        );
        for point in card.points {
            let mark = match point.kind {
                PointKind::Pro => "\u{2713}",
                PointKind::Con => "\u{2717}",
            };
            let _ = write!(out, "<li>{} {}</li>", mark, text(point.text));
        }
        out.push_str("</ul></div>\n");
    }
    out.push_str("</div></section>\n");
}

fn write_footer(out: &mut String, config: &SiteConfig) {
    let _ = writeln!(
        out,
        "<footer><p><strong>{}</strong></p><p>{}. <em>{}</em>. <a href=\"{}\">{}</a></p><p>{}</p><p><small>{}</small></p></footer>",
        text(content::BRAND_TITLE),
        text(content::PAPER_CITATION),
        text(content::PAPER_JOURNAL),
        attr(config.paper_url().as_str()),
        text(config.paper_url().as_str()),
        text(&content::FOOTER_LINKS.join(" \u{2022} ")),
        text(content::FOOTER_NOTE)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::diagram::DiagramLayout;
    use crate::render::svg::render_diagram_svg;

    fn page() -> String {
        let layout = DiagramLayout::standard();
        let diagrams: Vec<(ModelVariant, String)> = ModelVariant::ALL
            .iter()
            .map(|v| (*v, render_diagram_svg(&layout, *v)))
            .collect();
        render_index(&SiteConfig::standard().unwrap(), &diagrams)
    }

    #[test]
    fn one_radio_checked() {
        let html = page();
        assert_eq!(html.matches("type=\"radio\"").count(), 3);
        assert_eq!(html.matches(" checked>").count(), 1);
        assert!(html.contains("id=\"model-correlated\" value=\"correlated\" checked>"));
    }

    #[test]
    fn base_and_anchors() {
        let html = page();
        assert!(html.contains("<base href=\"/cfa-brm/\">"));
        for s in Section::ALL {
            assert!(html.contains(&format!("<section id=\"{}\"", s.anchor())));
            assert!(html.contains(&format!("<a href=\"#{}\">", s.anchor())));
        }
    }

    #[test]
    fn six_steps() {
        let html = page();
        assert_eq!(html.matches("class=\"cfa-step\"").count(), 6);
    }

    #[test]
    fn asset_paths() {
        assert_eq!(model_asset(ModelVariant::SecondOrder), "models/second-order.svg");
    }
}
