use super::*;

#[test]
fn default_is_the_threshold_poster() {
    let cfg = PosterConfig::default();
    assert_eq!(
        cfg.canvas,
        Canvas {
            width: 2400,
            height: 2800
        }
    );
    assert_eq!(cfg.seed, 42);
    assert_eq!(cfg.margin, 160);
    assert_eq!(cfg.right(), 2240);
    assert_eq!(cfg.bottom(), 2640);
    assert_eq!(cfg.palette.bg.to_string(), "#0B0D10");
    assert_eq!(cfg.zones.len(), 3);
    assert_eq!(cfg.waypoints.len(), 3);
    cfg.validate().unwrap();
}

#[test]
fn mosaic_sets_are_disjoint_and_palette_has_eight_shades() {
    let m = PosterConfig::default().mosaic;
    assert_eq!(m.accent_cells.len(), 18);
    assert_eq!(m.secondary_cells.len(), 14);
    assert!(m.accent_cells.is_disjoint(&m.secondary_cells));
    assert_eq!(m.palette.len(), 8);
    assert_eq!(m.pitch(), 75);
}

#[test]
fn validate_rejects_oversized_canvas() {
    let mut cfg = PosterConfig::default();
    cfg.canvas.width = 70_000;
    assert!(matches!(cfg.validate(), Err(PosterError::Validation(_))));
}

#[test]
fn validate_rejects_margin_without_interior() {
    let mut cfg = PosterConfig::default();
    cfg.margin = 1200;
    assert!(cfg.validate().is_err());

    cfg.margin = -1;
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_rejects_degenerate_mosaic() {
    let mut cfg = PosterConfig::default();
    cfg.mosaic.cell = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = PosterConfig::default();
    cfg.mosaic.palette.clear();
    assert!(cfg.validate().is_err());

    let mut cfg = PosterConfig::default();
    cfg.mosaic.rows = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_requires_every_font_role() {
    let mut cfg = PosterConfig::default();
    cfg.fonts.remove(&FontRole::Coord);
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("Coord"));
}

#[test]
fn validate_rejects_margin_too_narrow_for_marks() {
    let mut cfg = PosterConfig::default();
    cfg.margin = 59;
    assert!(
        cfg.validate()
            .unwrap_err()
            .to_string()
            .contains("margin marks")
    );
    cfg.margin = 60;
    cfg.validate().unwrap();
}
