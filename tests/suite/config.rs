//! Configuration files feeding mounted carousels.

use std::fs;

use marquee_config::{ConfigError, MarqueeConfig};
use marquee_engine::{
    AnimationType, ArrowVariant, Carousel, ContinuousCarousel, DisplayMode, HostSignal,
};

fn load(contents: &str) -> Result<Option<MarqueeConfig>, ConfigError> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    MarqueeConfig::load_from(&path)
}

#[test]
fn responsive_table_from_file_drives_layout() {
    let config = load(
        r#"
[carousel]
items_per_slide = 1
animation_type = "fade"
arrow_variant = "shadow"

[carousel.responsive]
0 = 2
640 = 3
1024 = 4
"#,
    )
    .unwrap()
    .unwrap();

    let slide_config = config.slide_config();
    assert_eq!(slide_config.animation_type, AnimationType::Fade);
    assert_eq!(slide_config.arrow_variant, ArrowVariant::Shadow);

    let mut carousel = Carousel::mount((0..12).collect::<Vec<u32>>(), slide_config);
    for (width, per_slide) in [(500, 2), (800, 3), (1200, 4)] {
        carousel.handle(HostSignal::Resize { width });
        assert_eq!(carousel.items_per_slide().get(), per_slide);
        assert_eq!(carousel.slide_count(), 12 / per_slide);
    }
}

#[test]
fn breakpoints_above_viewport_fall_back_to_base() {
    let config = load("[carousel.responsive]\n640 = 2\n").unwrap().unwrap();
    let mut carousel = Carousel::mount(vec![1, 2, 3], config.slide_config());
    carousel.handle(HostSignal::Resize { width: 10 });
    assert_eq!(carousel.items_per_slide().get(), 1);
}

#[test]
fn continuous_section_sets_loop_length() {
    let config = load("[continuous]\nanimation_duration = 2.0\npause_on_hover = false\n")
        .unwrap()
        .unwrap();
    let strip = ContinuousCarousel::mount((0..8).collect::<Vec<u8>>(), config.continuous_config());
    assert_eq!(strip.loop_duration().as_secs(), 16);
    assert!(!strip.config().pause_on_hover);
}

#[test]
fn app_section_selects_mode_and_accessibility() {
    let config = load("[app]\nmode = \"continuous\"\nreduced_motion = true\n")
        .unwrap()
        .unwrap();
    let app = config.app.clone().unwrap();
    assert_eq!(app.mode, DisplayMode::Continuous);
    assert!(config.ui_options().reduced_motion);
}

#[test]
fn invalid_values_are_rejected_at_load() {
    for contents in [
        "[carousel]\nitems_per_slide = 0\n",
        "[carousel]\nanimation_duration = 0.0\n",
        "[continuous]\nanimation_duration = -1.0\n",
        "[carousel.responsive]\nmobile = 2\n",
        "[carousel]\nloop = \"yes\"\n",
        "[carousel]\nunknown_option = 1\n",
    ] {
        let err = load(contents).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{contents}");
    }
}
