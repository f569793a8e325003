//! Shared stylesheet generation.
//!
//! The theme document renders to one CSS string shared by every slide's
//! markup document. Layout values are absolute (the renderer works on a
//! fixed-size slide canvas, not a reflowing page), so the content region and
//! title are positioned explicitly from the theme geometry.

use std::fmt::Write;

use crate::theme::Theme;

/// Generate the shared stylesheet for a theme.
pub fn generate(theme: &Theme) -> String {
    let p = &theme.palette;
    let t = &theme.typography;
    let l = &theme.layout;
    let b = &theme.components.boxed;

    let mut css = String::with_capacity(4096);

    let _ = write!(
        css,
        "body {{ width: {w}pt; height: {h}pt; margin: 0; padding: 0; \
         background-color: {bg}; font-family: {font}; overflow: hidden; }}\n",
        w = l.slide.width_pt,
        h = l.slide.height_pt,
        bg = p.functional.background,
        font = t.font_family.base,
    );

    css.push_str(
        "h1, h2, p, ul, li { margin: 0; padding: 0; font-size: inherit; font-weight: inherit; }\n\
         .slide-container { position: relative; width: 100%; height: 100%; }\n",
    );

    let _ = write!(
        css,
        ".slide-title {{ position: absolute; left: {x}pt; top: {y}pt; font-size: {size}; \
         font-weight: bold; color: {color}; white-space: nowrap; overflow: hidden; \
         text-overflow: ellipsis; max-width: calc(100% - {margin}pt); }}\n",
        x = l.header.title.x_pt,
        y = l.header.title.y_pt,
        size = t.sizes.slide_title,
        color = p.primary.main,
        margin = l.header.title.x_pt * 2.0,
    );

    let _ = write!(
        css,
        ".content {{ position: absolute; top: {y}pt; left: {x}pt; width: {w}pt; height: {h}pt; \
         color: {color}; font-size: {size}; line-height: {lh}; display: flex; \
         flex-direction: column; justify-content: flex-start; gap: 12pt; }}\n",
        y = l.content.y_pt,
        x = l.content.x_pt,
        w = l.content.w_pt,
        h = l.content.h_pt,
        color = p.functional.text,
        size = t.sizes.body,
        lh = t.line_height.base,
    );

    css.push_str(
        ".columns { display: flex; gap: 20pt; width: 100%; align-items: flex-start; }\n\
         .column { display: flex; flex-direction: column; gap: 8pt; min-width: 0; \
         flex-basis: 0; overflow-wrap: break-word; }\n",
    );

    let _ = write!(
        css,
        ".box {{ background-color: {bg}; border-left: {bw}pt solid {accent}; padding: {pad}pt; \
         box-shadow: {shadow}; width: 100%; box-sizing: border-box; display: flex; \
         flex-direction: column; gap: {gap}pt; }}\n\
         .box > * {{ margin: 0; }}\n",
        bg = b.background_color,
        bw = b.border_left_width_pt,
        accent = p.functional.success,
        pad = b.padding_pt,
        shadow = b.shadow,
        gap = b.inner_gap(),
    );

    let _ = write!(
        css,
        ".box.highlight {{ border-left-color: {gold}; }}\n\
         .box.warning {{ border-left-color: {warn}; }}\n\
         .box.primary {{ background-color: {green}; color: {main}; border: none; }}\n\
         .box.primary h2 {{ color: {main}; }}\n\
         .box.primary strong {{ color: {main}; text-decoration: underline; }}\n",
        gold = p.primary.secondary,
        warn = p.functional.warning,
        green = p.functional.success,
        main = p.primary.main,
    );

    // KPI dashboard boxes.
    css.push_str(
        ".box.kpi { text-align: center; padding: 16pt; }\n\
         .box.kpi .number { font-size: 28pt; font-weight: bold; color: #4A4A3E; }\n\
         .box.kpi .label { font-size: 11pt; color: #A3A099; margin-bottom: 4pt; }\n\
         .box.kpi .badge { background-color: #1E8E3E; color: white; padding: 3pt 8pt; \
         font-size: 10pt; display: inline-block; margin-top: 4pt; }\n",
    );

    // Surface color variants for comparison layouts.
    let _ = write!(
        css,
        ".box.dark {{ background-color: #4A4A3E; color: {inv}; border: none; }}\n\
         .box.gold {{ background-color: {gold}; color: {inv}; border: none; }}\n\
         .box.dark-gold {{ background-color: #766741; color: {inv}; border: none; }}\n\
         .box.light-gray {{ background-color: #EFEEEB; color: {text}; border: none; }}\n\
         .box.gray {{ background-color: #A3A099; color: {text}; border: none; }}\n",
        inv = p.functional.text_inverse,
        gold = p.primary.secondary,
        text = p.functional.text,
    );

    // Numbered outline items, used by passthrough markup.
    let _ = write!(
        css,
        ".outline-container {{ display: flex; flex-direction: column; gap: 12pt; }}\n\
         .outline-item {{ display: flex; align-items: flex-start; gap: 12pt; }}\n\
         .outline-number {{ width: 28pt; height: 28pt; background-color: {gold}; display: flex; \
         align-items: center; justify-content: center; flex-shrink: 0; }}\n\
         .outline-number p {{ color: {main}; font-weight: bold; font-size: 14pt; \
         text-align: center; margin: 0; }}\n\
         .outline-text {{ flex: 1; padding-top: 4pt; }}\n\
         .outline-text p {{ color: {text}; font-size: {body}; line-height: 1.4; margin: 0; }}\n",
        gold = p.primary.secondary,
        main = p.primary.main,
        text = p.functional.text,
        body = t.sizes.body,
    );

    let _ = write!(
        css,
        "h2 {{ font-size: {size}; color: {gold}; margin-bottom: 4pt; font-family: {font}; \
         line-height: 1.2; }}\n\
         h3 {{ font-size: {body}; font-weight: bold; color: {gold}; margin-bottom: 4pt; \
         font-family: {font}; line-height: 1.2; }}\n",
        size = t.sizes.section_header,
        body = t.sizes.body,
        gold = p.primary.secondary,
        font = t.font_family.heading,
    );

    let _ = write!(
        css,
        "ul {{ padding-left: 1.2em; }}\n\
         li {{ margin-bottom: 3pt; }}\n\
         strong {{ color: {green}; font-weight: bold; }}\n\
         blockquote {{ border-left: 3pt solid #ccc; padding-left: 10pt; font-style: italic; \
         color: #666; }}\n",
        green = p.functional.success,
    );

    let _ = write!(
        css,
        "table {{ width: 100%; border-collapse: collapse; font-size: {body}; margin: 8pt 0; }}\n\
         table th {{ background-color: {gold}; color: {main}; font-weight: bold; \
         padding: 10pt 12pt; text-align: left; border: none; }}\n\
         table td {{ padding: 8pt 12pt; border-bottom: 1pt solid #E5E5E5; vertical-align: top; }}\n\
         table tr:nth-child(even) td {{ background-color: #F9F9F7; }}\n\
         table td.highlight {{ background-color: {green}; color: {main}; font-weight: bold; }}\n\
         table td.gold {{ background-color: {gold}; color: {main}; font-weight: bold; }}\n",
        body = t.sizes.body,
        gold = p.primary.secondary,
        main = p.primary.main,
        green = p.functional.success,
    );

    css
}
