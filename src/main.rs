use overlay_menu::config::load_config;
use overlay_menu::loading;
use overlay_menu::persistence::RonSettings;
use overlay_menu::rng::SampleGenerator;
use overlay_menu::ui::{
    DrawList, InputEvent, Member, MenuBool, MenuError, MenuSlider, MenuTree, MenuValue,
    MouseButton,
};

/// Humanized delay for the next scripted action, from the `humanizer` menu.
/// `None` when the humanizer is off or missing from the layout.
fn humanized_delay(tree: &MenuTree, sampler: &mut SampleGenerator) -> Option<i32> {
    let overlay = tree.find("overlay").ok()?;
    let Some(Member::Component(humanizer)) = tree.member(overlay, "humanizer") else {
        return None;
    };
    if !tree.get_value::<MenuBool>(humanizer, "enabled").ok()?.value {
        return None;
    }
    let min = tree
        .get_value::<MenuSlider>(humanizer, "min_delay")
        .ok()?
        .value();
    let spread = tree
        .get_value::<MenuSlider>(humanizer, "spread")
        .ok()?
        .value();
    // The sampler can overshoot its range; a delay never goes negative.
    Some(sampler.sample(min, spread).max(0))
}

fn run() -> Result<(), MenuError> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/config.ron".to_string());
    let config = load_config(&config_path);

    let mut tree = MenuTree::with_theme(config.theme.clone());
    let roots = loading::load_layout(&mut tree, &config.layout_path);
    if roots.is_empty() {
        log::warn!("no menus loaded from {}", config.layout_path);
    }

    let mut settings = RonSettings::open(&config.settings_path)?;
    tree.load_all(&settings)?;

    let mut sampler = SampleGenerator::from_seed(config.seed);
    let mut draw_list = DrawList::new();

    for frame in 0..config.frames {
        tree.update();
        draw_list.clear();
        tree.draw(&mut draw_list);
        log::info!(
            "frame {}: {} panels, {} texts",
            frame,
            draw_list.panels.len(),
            draw_list.texts.len()
        );

        // Scripted input: open the first menu on the first frame.
        if frame == 0
            && let Some(&first) = tree.roots().first()
        {
            let p = tree.position(first);
            let at = (p.x + 1.0, p.y + 1.0);
            tree.dispatch(InputEvent::MouseDown {
                button: MouseButton::Left,
                x: at.0,
                y: at.1,
            });
            tree.dispatch(InputEvent::MouseUp {
                button: MouseButton::Left,
                x: at.0,
                y: at.1,
            });
        }

        if let Some(delay) = humanized_delay(&tree, &mut sampler) {
            log::info!("frame {}: next action in {} ms", frame, delay);
        }
    }

    if let Ok(overlay) = tree.find("overlay")
        && let Some(Member::Value(MenuValue::Bool(enabled))) = tree.member(overlay, "enabled")
    {
        log::info!("overlay enabled: {}", enabled.value);
    }

    tree.save_all(&mut settings)?;
    settings.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
