mod common;

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use rs_banner_generator::error::SaveError;
    use rs_banner_generator::raster::{self, Typeface};
    use rs_banner_generator::save::*;

    use super::common::{self, TempFile, TempPath};

    const BANNER: &str = "\x1b[31m _   _ \n| | | |\n\x1b[0m";

    fn missing_typeface() -> ImageOptions {
        ImageOptions {
            typeface: Some("/this/typeface/does/not/exist.ttf".into()),
            ..ImageOptions::default()
        }
    }

    #[test]
    fn declining_text_save_writes_nothing() {
        let target = TempPath::new("declined.txt");
        let mut console = common::console(&["n", target.as_str()]);
        assert_eq!(offer_text_save(&mut console, BANNER).unwrap(), None);
        assert!(!target.path.exists());
    }

    #[test]
    fn text_save_keeps_styling_and_reprompts_on_extension() {
        let target = TempPath::new("saved.txt");
        let mut console = common::console(&["y", "banner.md", target.as_str()]);
        let saved = offer_text_save(&mut console, BANNER).unwrap();

        assert_eq!(saved.as_deref(), Some(target.path.as_path()));
        assert_eq!(fs::read_to_string(&target.path).unwrap(), BANNER);

        let out = common::output(console);
        assert!(out.contains("Invalid input! Try again."));
        assert!(out.contains("Banner saved as"));
    }

    #[test]
    fn text_save_failure_is_reported() {
        let mut console = common::console(&["y", "/this/dir/does/not/exist/banner.txt"]);
        assert_eq!(offer_text_save(&mut console, BANNER).unwrap(), None);
        assert!(common::output(console).contains("Error saving file"));
    }

    #[test]
    fn declining_image_save_writes_nothing() {
        let mut console = common::console(&[""]);
        assert_eq!(offer_image_save(&mut console, BANNER, &ImageOptions::default()).unwrap(), None);
        assert!(!common::output(console).contains("file name"));
    }

    #[test]
    fn image_prompts_validate_extension_and_numbers() {
        let target = TempPath::new("rejected.png");
        let mut console = common::console(&["y", "banner.jpg", target.as_str(), "abc", "0", "", "", ""]);
        let saved = offer_image_save(&mut console, BANNER, &missing_typeface()).unwrap();

        assert_eq!(saved, None);
        assert!(!target.path.exists());
        let out = common::output(console);
        assert_eq!(out.matches("Invalid input! Try again.").count(), 3);
        assert!(out.contains("Error saving image"));
    }

    #[test]
    fn image_options_from_flags_skip_prompts() {
        let target = TempPath::new("preset.png");
        let options = ImageOptions {
            width: Some(320),
            height: Some(64),
            font_size: Some(12),
            ..missing_typeface()
        };
        let mut console = common::console(&["y", target.as_str()]);
        offer_image_save(&mut console, BANNER, &options).unwrap();
        assert!(!common::output(console).contains("image width"));
    }

    #[test]
    fn output_path_picks_format_by_extension() {
        let target = TempPath::new("direct.txt");
        let mut console = common::console(&[]);
        assert!(save_to_output(&mut console, BANNER, &target.path, &ImageOptions::default()).unwrap());
        assert_eq!(fs::read_to_string(&target.path).unwrap(), BANNER);

        let image = TempPath::new("direct.png");
        let mut console = common::console(&[]);
        assert!(!save_to_output(&mut console, BANNER, &image.path, &missing_typeface()).unwrap());
        assert!(!image.path.exists());
    }

    #[test]
    fn spec_defaults() {
        let spec = ImageOptions::default().spec_for(Path::new("banner.png"));
        assert_eq!((spec.width, spec.height, spec.font_size), (800, 200, 20));
    }

    #[test]
    fn styling_is_stripped_before_rasterizing() {
        assert_eq!(raster::strip_styling("\x1b[1;31mHI\x1b[0m\n\x1b[38;2;1;2;3mX"), "HI\nX");
        assert_eq!(raster::strip_styling("plain"), "plain");
    }

    #[test]
    fn typeface_errors() {
        assert!(matches!(
            Typeface::load(Path::new("/this/typeface/does/not/exist.ttf")),
            Err(SaveError::Io(_))
        ));
        let garbage = TempFile::new("garbage.ttf", "definitely not a font");
        assert!(matches!(Typeface::load(&garbage.path), Err(SaveError::InvalidTypeface(_))));
    }

    #[test]
    fn oversized_canvas_is_rejected_before_allocating() {
        let target = TempPath::new("huge.png");
        let options = ImageOptions {
            width: Some(u32::MAX),
            height: Some(u32::MAX),
            ..missing_typeface()
        };
        assert!(matches!(
            save_image(&options.spec_for(&target.path), BANNER, options.typeface.as_deref()),
            Err(SaveError::CanvasTooLarge { width: u32::MAX, height: u32::MAX, .. })
        ));
        assert!(!target.path.exists());

        assert!(raster::check_canvas(DEFAULT_WIDTH, DEFAULT_HEIGHT).is_ok());
        assert!(matches!(raster::check_canvas(100_000, 100_000), Err(SaveError::CanvasTooLarge { .. })));
        assert!(matches!(raster::check_canvas(0, 10), Err(SaveError::EmptyCanvas { .. })));
    }

    #[test]
    fn oversized_output_save_is_reported() {
        let target = TempPath::new("huge_output.png");
        let options = ImageOptions {
            width: Some(u32::MAX),
            height: Some(u32::MAX),
            ..ImageOptions::default()
        };
        let mut console = common::console(&[]);
        assert!(!save_to_output(&mut console, BANNER, &target.path, &options).unwrap());
        assert!(common::output(console).contains("Error saving image: image of"));
        assert!(!target.path.exists());
    }

    #[test]
    #[ignore = "needs a system monospace typeface (DejaVu, Liberation or FreeMono)"]
    fn rasterizes_with_system_typeface() {
        let typeface = Typeface::locate(None).expect("no system monospace typeface installed");

        let image = raster::rasterize("HI\nTHERE", 120, 60, 16, &typeface).unwrap();
        assert_eq!(image.dimensions(), (120, 60));
        assert!(image.pixels().any(|p| p.0 != [0, 0, 0]));
        assert_eq!(*image.get_pixel(119, 59), raster::BACKGROUND);

        assert!(matches!(
            raster::rasterize("HI", 0, 60, 16, &typeface),
            Err(SaveError::EmptyCanvas { .. })
        ));

        let target = TempPath::new("system.png");
        save_image(&ImageOptions::default().spec_for(&target.path), BANNER, Some(typeface.path())).unwrap();
        assert!(target.path.exists());
    }
}
