//! Demo window: an instrument front panel whose theme can be switched from the menu.
//!
//! ```bash
//! cargo run --bin theme-demo                      # built-in defaults
//! cargo run --bin theme-demo -- theme.yaml        # load a config file
//! RUST_LOG=instrument_theme=debug cargo run --bin theme-demo
//! ```

use eframe::egui::{self, Align2, FontId, RichText, Sense, Stroke, StrokeKind};
use instrument_theme::{
    apply_menu, ActiveTheme, Axis, ChartPane, Checkable, MenuColors, MenuItem, NodeId, NodeKind, Style,
    StylingEngine, TabContainer, TabDrawMode, ThemeConfig, ThemeError, ThemeId, ThemeRegistry, VisualNode,
    VisualTree,
};

fn build_window() -> VisualTree {
    let mut tree = VisualTree::new(VisualNode::generic("Instrument"));
    let root = tree.root();
    let tabs = tree.add_child(
        root,
        VisualNode::new(
            "Tabs",
            NodeKind::TabContainer(TabContainer {
                draw_mode: TabDrawMode::OwnerDrawFixed,
            }),
        ),
    );
    let scope = ChartPane::new("Scope")
        .with_y_axis(Axis::new("Current"))
        .with_y2_axis(Axis::new("Position"));
    tree.add_child(tabs, VisualNode::new("Scope", NodeKind::ChartPane(Box::new(scope))));
    let settings = tree.add_child(tabs, VisualNode::generic("Settings"));
    tree.add_child(
        settings,
        VisualNode::new("Autoscale", NodeKind::Checkable(Checkable { checked: true })),
    );
    tree.add_child(settings, VisualNode::new("Trigger level", NodeKind::Other("NumericUpDown".into())));
    // Status LED keeps its signal color regardless of theme.
    let status = VisualNode::generic("Status: connected")
        .with_tag("NoTheme;status")
        .with_style(Style {
            background: egui::Color32::from_rgb(0, 120, 0),
            foreground: egui::Color32::WHITE,
        });
    tree.add_child(root, status);
    tree
}

fn build_menu() -> Vec<MenuItem> {
    let themes = ThemeId::all().iter().map(|id| MenuItem::new(id.name())).collect();
    vec![
        MenuItem::new("File").with_items(vec![MenuItem::new("Connect..."), MenuItem::new("Set trigger...")]),
        MenuItem::new("View").with_items(vec![MenuItem::new("Theme").with_items(themes)]),
    ]
}

struct ThemeDemoApp {
    registry: ThemeRegistry,
    active: ActiveTheme,
    engine: StylingEngine,
    window: VisualTree,
    menu: Vec<MenuItem>,
    menu_colors: MenuColors,
    dirty: bool,
}

impl ThemeDemoApp {
    fn new(cfg: &ThemeConfig) -> Result<Self, ThemeError> {
        let registry = cfg.registry()?;
        let mut active = cfg.active_theme();
        let ctx = active.context(&registry);
        Ok(Self {
            registry,
            active,
            engine: cfg.engine(),
            window: build_window(),
            menu: build_menu(),
            menu_colors: MenuColors::from_context(&ctx),
            dirty: true,
        })
    }

    fn restyle(&mut self, egui_ctx: &egui::Context) {
        let ctx = self.active.context(&self.registry);
        let root = self.window.root();
        let report = self.engine.apply_theme(&mut self.window, root, &ctx);
        apply_menu(&mut self.menu, &ctx);
        for id in ThemeId::all() {
            for top in &mut self.menu {
                if let Some(item) = top.find_mut(id.name()) {
                    item.checked = *id == ctx.theme();
                }
            }
        }
        self.menu_colors = MenuColors::from_context(&ctx);
        ctx.apply(egui_ctx);
        tracing::info!(theme = %ctx.theme(), styled = report.styled, "theme switched");
    }

    fn menu_bar(&mut self, ui: &mut egui::Ui) -> Option<String> {
        let mut clicked = None;
        egui::MenuBar::new().ui(ui, |ui| {
            for item in &self.menu {
                menu_entry(ui, item, &mut clicked);
            }
        });
        clicked
    }
}

fn menu_entry(ui: &mut egui::Ui, item: &MenuItem, clicked: &mut Option<String>) {
    ui.scope(|ui| {
        ui.visuals_mut().override_text_color = Some(item.style.foreground);
        if item.items.is_empty() {
            if ui.selectable_label(item.checked, item.text.as_str()).clicked() {
                *clicked = Some(item.text.clone());
                ui.close();
            }
        } else {
            ui.menu_button(item.text.as_str(), |ui| {
                for sub in &item.items {
                    menu_entry(ui, sub, clicked);
                }
            });
        }
    });
}

fn draw_node(ui: &mut egui::Ui, tree: &VisualTree, id: NodeId) {
    let Some(node) = tree.get(id) else { return };
    egui::Frame::new()
        .fill(node.style.background)
        .inner_margin(egui::Margin::same(6))
        .show(ui, |ui| {
            let text = RichText::new(node.name.as_str()).color(node.style.foreground);
            match &node.kind {
                NodeKind::ChartPane(pane) => draw_chart(ui, pane),
                NodeKind::Checkable(c) => {
                    let mut checked = c.checked;
                    ui.checkbox(&mut checked, text);
                }
                _ => {
                    ui.label(text);
                }
            }
            for &child in node.children() {
                draw_node(ui, tree, child);
            }
        });
}

fn draw_chart(ui: &mut egui::Ui, pane: &ChartPane) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 180.0), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, pane.fill.color);

    let plot = rect.shrink2(egui::vec2(48.0, 20.0));
    painter.rect_filled(plot, 0.0, pane.chart.fill.color);
    painter.rect_stroke(plot, 0.0, Stroke::new(pane.chart.border.width, pane.chart.border.color), StrokeKind::Inside);

    let x = &pane.x_axis;
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], Stroke::new(1.0, x.color));
    painter.text(plot.center_bottom(), Align2::CENTER_TOP, &x.title, FontId::proportional(x.scale_font.size), x.scale_font.color);

    for (i, axis) in pane.y_axes.iter().enumerate() {
        let left = plot.left() - 12.0 * i as f32;
        painter.line_segment([egui::pos2(left, plot.top()), egui::pos2(left, plot.bottom())], Stroke::new(1.0, axis.color));
        draw_ticks(&painter, left, plot.top(), plot.bottom(), axis, -1.0);
    }
    for (i, axis) in pane.y2_axes.iter().enumerate() {
        let right = plot.right() + 12.0 * i as f32;
        painter.line_segment([egui::pos2(right, plot.top()), egui::pos2(right, plot.bottom())], Stroke::new(1.0, axis.color));
        draw_ticks(&painter, right, plot.top(), plot.bottom(), axis, 1.0);
    }

    if pane.legend.visible {
        let legend = egui::Rect::from_min_size(plot.right_top() + egui::vec2(-90.0, 6.0), egui::vec2(84.0, 20.0));
        painter.rect_filled(legend, 0.0, pane.legend.fill.color);
        painter.rect_stroke(legend, 0.0, Stroke::new(1.0, pane.legend.border.color), StrokeKind::Inside);
        painter.text(legend.center(), Align2::CENTER_CENTER, &pane.title, FontId::proportional(pane.legend.font.size), pane.legend.font.color);
    }
}

fn draw_ticks(painter: &egui::Painter, x: f32, top: f32, bottom: f32, axis: &Axis, dir: f32) {
    const MAJOR: usize = 4;
    const MINOR_PER_MAJOR: usize = 4;
    let step = (bottom - top) / (MAJOR * MINOR_PER_MAJOR) as f32;
    for i in 0..=MAJOR * MINOR_PER_MAJOR {
        let y = top + step * i as f32;
        let tick = if i % MINOR_PER_MAJOR == 0 { &axis.major_tick } else { &axis.minor_tick };
        if tick.visible {
            painter.line_segment([egui::pos2(x, y), egui::pos2(x + dir * tick.length, y)], Stroke::new(1.0, tick.color));
        }
    }
}

impl eframe::App for ThemeDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.dirty {
            self.restyle(ctx);
            self.dirty = false;
        }

        let clicked = egui::TopBottomPanel::top("theme_demo_menu")
            .frame(egui::Frame::new().fill(self.menu_colors.strip_gradient_begin))
            .show(ctx, |ui| self.menu_bar(ui))
            .inner;

        egui::CentralPanel::default().show(ctx, |ui| {
            draw_node(ui, &self.window, self.window.root());
        });
        self.window.clear_repaint_flags();

        if let Some(text) = clicked {
            if let Ok(id) = text.parse::<ThemeId>() {
                self.active.set(id.name());
                self.dirty = true;
            } else {
                tracing::debug!(command = %text, "menu command not handled by demo");
            }
        }
    }
}

fn load_config() -> ThemeConfig {
    let Some(path) = std::env::args().nth(1) else {
        return ThemeConfig::default();
    };
    match ThemeConfig::load(std::path::Path::new(&path)) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Failed to load {path}: {e}; using defaults");
            ThemeConfig::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = load_config();
    let app = match ThemeDemoApp::new(&cfg) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!("Invalid theme config: {e}; using defaults");
            ThemeDemoApp::new(&ThemeConfig::default()).map_err(|e| eframe::Error::AppCreation(Box::new(e)))?
        }
    };

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Instrument theme demo"),
        ..Default::default()
    };
    eframe::run_native("Instrument theme demo", opts, Box::new(|_cc| Ok(Box::new(app))))
}
