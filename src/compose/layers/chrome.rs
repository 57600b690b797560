//! Navigation bar, footer lines and the call-to-action button.

use crate::{
    compose::builder::px, compose::layers::LayerCtx, compose::plan::Underline,
    text::fonts::FontRole,
};

pub const NAV_ITEMS: [&str; 5] = ["ORIGIN", "DISCOVER", "CURATE", "COLLECT", "ARRIVE"];

pub(crate) fn navigation(cx: &mut LayerCtx<'_>) {
    let p = cx.cfg.palette;
    let l = cx.layout;
    let ny = l.nav_y;

    cx.out.line(px(l.margin, ny), px(l.right, ny), p.dim, 1.0);

    let spacing = (l.right - l.margin) / NAV_ITEMS.len() as i32;
    let active = NAV_ITEMS.len() - 1;
    for (i, item) in NAV_ITEMS.iter().enumerate() {
        let at = px(l.margin + i as i32 * spacing, ny + 12);
        if i == active {
            cx.out.underlined_text(
                at,
                *item,
                FontRole::Nav,
                p.accent,
                Underline {
                    y: f64::from(ny + 30),
                    width: 2.0,
                },
            );
        } else {
            cx.out.text(at, *item, FontRole::Nav, p.whisper);
        }
    }
}

pub(crate) fn footer(cx: &mut LayerCtx<'_>) {
    let p = cx.cfg.palette;
    let l = cx.layout;
    let fy = l.footer_y;

    cx.out.text(
        px(l.margin, fy),
        "in.pinterest.com / cinematicvision1403",
        FontRole::MonoSmall,
        p.whisper,
    );
    cx.out.text(
        px(l.margin, fy + 20),
        "SMART PICKS  /  THRESHOLD CARTOGRAPHY  /  EST. 2026",
        FontRole::Coord,
        p.muted,
    );

    let bx = l.right - 240;
    let by = fy - 2;
    cx.out.outline_box(px(bx, by), px(bx + 230, by + 40), p.accent, 2.0);
    cx.out.text(
        px(bx + 22, by + 10),
        "BEGIN DISCOVERY",
        FontRole::Cta,
        p.accent,
    );

    // Arrow: shaft plus two barbs meeting at the tip.
    let (ax, ay) = (bx + 202, by + 20);
    let tip = px(ax + 10, ay);
    cx.out.line(px(ax, ay), tip, p.accent, 2.0);
    cx.out.line(px(ax + 7, ay - 3), tip, p.accent, 2.0);
    cx.out.line(px(ax + 7, ay + 3), tip, p.accent, 2.0);
}
