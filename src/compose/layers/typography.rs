use crate::{compose::builder::px, compose::layers::LayerCtx, text::fonts::FontRole};

const TITLE_Y: i32 = 210;
const RULE_LEN: i32 = 500;

/// Title, capped rule, subtitle and the edition tag to the right of the rule.
pub(crate) fn title(cx: &mut LayerCtx<'_>) {
    let p = cx.cfg.palette;
    let m = cx.layout.margin;

    cx.out.text(
        px(m + 4, TITLE_Y),
        "Smart Picks",
        FontRole::Title,
        p.primary,
    );

    let rule_y = TITLE_Y + 106;
    cx.out.line(px(m, rule_y), px(m + RULE_LEN, rule_y), p.secondary, 1.0);
    for x in [m, m + RULE_LEN] {
        cx.out.line(px(x, rule_y - 4), px(x, rule_y + 4), p.secondary, 1.0);
    }

    cx.out.text(
        px(m + 4, rule_y + 12),
        "CURATED PRODUCT CARTOGRAPHY",
        FontRole::Subtitle,
        p.whisper,
    );
    cx.out.text(
        px(m + RULE_LEN + 20, rule_y + 2),
        "EST. 2026",
        FontRole::Coord,
        p.muted,
    );
}

pub(crate) fn monument(cx: &mut LayerCtx<'_>) {
    let p = cx.cfg.palette;
    let m = cx.layout.margin;

    cx.out.text(px(m, 1140), "arrive.", FontRole::Monument, p.accent);
    cx.out.text(
        px(m + 8, 1300),
        "The moment before discovery becomes possession.",
        FontRole::SerifItalic,
        p.muted,
    );
}
