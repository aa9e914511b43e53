mod common;

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use rs_banner_generator::banner::BannerRequest;
    use rs_banner_generator::flow;
    use rs_banner_generator::fonts::FontCatalog;
    use rs_banner_generator::menu;
    use rs_banner_generator::save::ImageOptions;
    use rs_banner_generator::validate::{Alignment, BannerColor, Effect};
    use rs_banner_generator::Config;

    use super::common::{self, TempDir, TempPath};

    const NO_FONTS_DIR: &str = "this-directory-does-not-exist";

    fn catalog() -> FontCatalog {
        FontCatalog::load(Path::new(NO_FONTS_DIR))
    }

    fn preset() -> Config {
        Config {
            text: Some("HI".to_string()),
            font: Some("standard".to_string()),
            color: Some(BannerColor::Red),
            align: Some(Alignment::Left),
            effects: Some(Vec::new()),
            fonts_dir: PathBuf::from(NO_FONTS_DIR),
            ..Config::default()
        }
    }

    #[test]
    fn color_selection_rejects_bad_syntax_without_preview() {
        let mut console = common::console(&["purple", "red", "y"]);
        let color = flow::select_color(&mut console, &catalog(), "standard").unwrap();
        assert_eq!(color, BannerColor::Red);

        let out = common::output(console);
        assert_eq!(out.matches("Invalid color! Try again.").count(), 1);
        assert_eq!(out.matches("Is this color okay?").count(), 1);
    }

    #[test]
    fn color_selection_loops_until_confirmed() {
        let mut console = common::console(&["#00ff00", "n", "", ""]);
        let color = flow::select_color(&mut console, &catalog(), "standard").unwrap();
        assert_eq!(color, BannerColor::White);
        assert_eq!(common::output(console).matches("Is this color okay?").count(), 2);
    }

    #[test]
    fn effects_selection() {
        let mut console = common::console(&[""]);
        assert_eq!(flow::select_effects(&mut console).unwrap(), None);

        let mut console = common::console(&["bold,flying", "bold,underline"]);
        assert_eq!(
            flow::select_effects(&mut console).unwrap(),
            Some(vec![Effect::Bold, Effect::Underline])
        );
        assert!(common::output(console).contains("Invalid text effects! Try again."));
    }

    #[test]
    fn alignment_selection() {
        let mut console = common::console(&["middle", "right"]);
        assert_eq!(flow::select_alignment(&mut console).unwrap(), Alignment::Right);

        let mut console = common::console(&[""]);
        assert_eq!(flow::select_alignment(&mut console).unwrap(), Alignment::Left);
    }

    #[test]
    fn single_banner_from_flags_only_asks_save_gates() {
        let mut console = common::console(&["n", "n"]);
        let banner = flow::single_banner(&mut console, &preset()).unwrap().unwrap();
        assert!(banner.lines().count() > 1);

        let out = common::output(console);
        assert!(out.contains("Here is your banner:"));
        assert!(!out.contains("Enter the text for your banner: "));
        assert!(out.contains("Do you want to save the banner to a file?"));
        assert!(out.contains("Do you want to save the banner as an image?"));
    }

    #[test]
    fn single_banner_interactive() {
        let config = Config {
            fonts_dir: PathBuf::from(NO_FONTS_DIR),
            ..Config::default()
        };
        // text, font (default), color (default + confirm), effects, alignment, save gates
        let mut console = common::console(&["", "HELLO", "", "red", "", "bold", "center", "", ""]);
        let banner = flow::single_banner(&mut console, &config).unwrap();
        assert!(banner.is_some());
        assert!(common::output(console).contains("Available font:"));
    }

    #[test]
    fn single_banner_with_output_saves_without_asking() {
        let target = TempPath::new("flow_output.txt");
        let config = Config {
            output: Some(target.path.clone()),
            ..preset()
        };
        let mut console = common::console(&[]);
        let banner = flow::single_banner(&mut console, &config).unwrap().unwrap();
        assert_eq!(fs::read_to_string(&target.path).unwrap(), banner);
        assert!(!common::output(console).contains("(y/n)"));
    }

    #[test]
    fn single_banner_font_cancel_returns_none() {
        let config = Config {
            font: None,
            ..preset()
        };
        let mut console = common::console(&["exit"]);
        assert_eq!(flow::single_banner(&mut console, &config).unwrap(), None);
        assert!(common::output(console).contains("No font selected"));
    }

    #[test]
    fn all_fonts_sweeps_catalog_in_order() {
        let dir = TempDir::new("sweep_fonts");
        dir.touch("broken.flf", "not a font");
        let catalog = FontCatalog::load(&dir.path);

        let template = BannerRequest::new("HI", "ignored", BannerColor::Cyan);
        let mut console = common::console(&["", "n"]);
        let count = flow::all_fonts(&mut console, &catalog, &template, &ImageOptions::default()).unwrap();
        assert_eq!(count, 2);

        let out = common::output(console);
        let standard = out.find("Font: standard").unwrap();
        let broken = out.find("Font: broken.flf").unwrap();
        assert!(standard < broken);
        assert!(out.contains("Error: could not load font 'broken.flf'"));
        assert_eq!(out.matches("Do you want to save this banner?").count(), 2);
    }

    #[test]
    fn menu_validates_choice_and_exits() {
        let mut console = common::console(&["7", "5", "6"]);
        menu::run(&mut console, &preset()).unwrap();

        let out = common::output(console);
        assert!(out.contains("Invalid input! Try again."));
        assert!(out.contains("Help Menu:"));
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn menu_lists_fonts_and_stops_at_end_of_input() {
        let mut console = common::console(&["3"]);
        menu::run(&mut console, &preset()).unwrap();
        assert!(common::output(console).contains("[1] standard"));
    }

    #[test]
    fn menu_color_preview() {
        let mut console = common::console(&["4", "blue", "y", "6"]);
        menu::run(&mut console, &preset()).unwrap();
        assert!(common::output(console).contains("Exiting..."));
    }

    #[test]
    fn menu_all_fonts() {
        // text, color, confirm, effects, alignment, per-font save gate, exit
        let mut console = common::console(&["2", "HI", "green", "y", "", "", "n", "6"]);
        menu::run(&mut console, &preset()).unwrap();
        let out = common::output(console);
        assert!(out.contains("Font: standard"));
        assert!(out.contains("Exiting..."));
    }
}
