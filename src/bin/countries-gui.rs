/*!
 * Desktop browser for the country dataset.
 *
 * Two screens, mirroring the navigation surface of the library:
 * - `/`: search box, region filter and a grid of country cards
 * - `/country/{code}`: detail page with border-country links and a back button
 *
 * Every screen mounts with its own background load; navigating away cancels it.
 */

use clap::Parser;
use countries_rs::api::SOURCE_ENV;
use countries_rs::nav::{History, Route};
use countries_rs::settings::{Settings, Theme};
use countries_rs::{
    Client, CountryCard, CountryDetail, DetailDisplay, DetailView, ListView, LoadState, Source,
};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "countries-gui", version, about = "Where in the world? Country browser")]
struct GuiArgs {
    /// Dataset location: a base URL serving /data.json, or a local JSON file.
    #[arg(short, long, env = SOURCE_ENV, default_value = "data.json")]
    source: String,
    /// Location to open first, e.g. `/country/FRA`.
    #[arg(default_value = "/")]
    location: String,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let args = GuiArgs::parse();
    let client = Client::new(Source::parse(&args.source));
    let start = Route::parse(&args.location).unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Where in the world?"),
        ..Default::default()
    };

    eframe::run_native(
        "Where in the world?",
        options,
        Box::new(move |cc| {
            let prefers_dark = cc.egui_ctx.style().visuals.dark_mode;
            let settings = Settings::load(Settings::default_path(), prefers_dark);
            apply_theme(&cc.egui_ctx, settings.theme());
            Ok(Box::new(CountriesApp::new(client, settings, start)))
        }),
    )
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    ctx.set_visuals(if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}

enum Screen {
    List(ListView),
    Detail(DetailView),
}

impl Screen {
    fn mount(client: &Client, route: &Route) -> Self {
        match route {
            Route::Index => Screen::List(ListView::mount(client.clone())),
            Route::Country(code) => Screen::Detail(DetailView::mount(client.clone(), code.clone())),
        }
    }

    fn update(&mut self) -> bool {
        match self {
            Screen::List(v) => v.update(),
            Screen::Detail(v) => v.update(),
        }
    }

    fn is_loading(&self) -> bool {
        match self {
            Screen::List(v) => v.state().is_loading(),
            Screen::Detail(v) => v.state().is_loading(),
        }
    }

    fn teardown(&mut self) {
        match self {
            Screen::List(v) => v.teardown(),
            Screen::Detail(v) => v.teardown(),
        }
    }
}

/// Requested by a click while drawing; applied after the frame's UI pass.
enum NavRequest {
    Go(Route),
    Back,
}

struct CountriesApp {
    client: Client,
    settings: Settings,
    history: History,
    screen: Screen,
}

impl CountriesApp {
    fn new(client: Client, settings: Settings, start: Route) -> Self {
        let screen = Screen::mount(&client, &start);
        Self {
            client,
            settings,
            history: History::new(start),
            screen,
        }
    }

    fn navigate(&mut self, req: NavRequest) {
        match req {
            NavRequest::Go(route) => self.history.push(route),
            NavRequest::Back => {
                if !self.history.can_go_back() {
                    return;
                }
                self.history.back();
            }
        }
        log::debug!("navigating to {}", self.history.current());
        self.screen.teardown();
        self.screen = Screen::mount(&self.client, self.history.current());
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        if let Err(err) = self.settings.toggle_theme() {
            log::warn!("theme not persisted: {}", err);
        }
        apply_theme(ctx, self.settings.theme());
    }
}

impl eframe::App for CountriesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.screen.update();

        // Keep polling the background load while it is pending.
        if self.screen.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        let mut nav: Option<NavRequest> = None;
        let mut toggle = false;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.link(egui::RichText::new("Where in the world?").heading()).clicked() {
                    nav = Some(NavRequest::Go(Route::Index));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.settings.theme().label()).clicked() {
                        toggle = true;
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match &mut self.screen {
                Screen::List(view) => list_ui(ui, view, &mut nav),
                Screen::Detail(view) => detail_ui(ui, view, self.history.can_go_back(), &mut nav),
            });
        });

        if toggle {
            self.toggle_theme(ctx);
        }
        if let Some(req) = nav {
            self.navigate(req);
            ctx.request_repaint();
        }
    }
}

fn list_ui(ui: &mut egui::Ui, view: &mut ListView, nav: &mut Option<NavRequest>) {
    match view.state() {
        LoadState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading…");
            });
            return;
        }
        LoadState::Failed(msg) => {
            ui.colored_label(egui::Color32::RED, msg);
            return;
        }
        LoadState::Ready(_) => {}
    }

    let regions: Vec<String> = view.regions().into_iter().map(str::to_string).collect();

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut view.query)
                .hint_text("Search for a country…")
                .desired_width(300.0),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let selected = if view.region.is_empty() {
                "Filter by Region".to_string()
            } else {
                view.region.clone()
            };
            egui::ComboBox::from_id_salt("region-filter")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut view.region, String::new(), "Filter by Region");
                    for r in &regions {
                        ui.selectable_value(&mut view.region, r.clone(), r);
                    }
                });
        });
    });
    ui.add_space(10.0);

    let cards = view.cards();
    ui.horizontal_wrapped(|ui| {
        for card in &cards {
            card_ui(ui, card, nav);
        }
    });
}

fn card_ui(ui: &mut egui::Ui, card: &CountryCard, nav: &mut Option<NavRequest>) {
    ui.group(|ui| {
        ui.set_width(220.0);
        ui.vertical(|ui| {
            let title = ui.link(egui::RichText::new(&card.name).strong());
            let title = match &card.flag {
                Some(flag) => title.on_hover_text(flag),
                None => title,
            };
            if title.clicked() {
                *nav = Some(NavRequest::Go(Route::Country(card.code.clone())));
            }
            ui.label(format!("Population: {}", card.population));
            ui.label(format!("Region: {}", card.region));
            ui.label(format!("Capital: {}", card.capital));
        });
    });
}

fn detail_ui(
    ui: &mut egui::Ui,
    view: &DetailView,
    can_go_back: bool,
    nav: &mut Option<NavRequest>,
) {
    if ui
        .add_enabled(can_go_back, egui::Button::new("← Back"))
        .clicked()
    {
        *nav = Some(NavRequest::Back);
    }
    ui.add_space(10.0);

    match view.display() {
        DetailDisplay::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading…");
            });
        }
        DetailDisplay::Failed(msg) => {
            ui.colored_label(egui::Color32::RED, msg);
        }
        DetailDisplay::NotFound => {
            ui.label("Country not found.");
        }
        DetailDisplay::Found(d) => country_ui(ui, &d, nav),
    }
}

fn country_ui(ui: &mut egui::Ui, d: &CountryDetail, nav: &mut Option<NavRequest>) {
    if let Some(flag) = &d.flag {
        ui.hyperlink_to(format!("Flag of {}", d.name), flag);
    }
    ui.heading(&d.name);
    ui.add_space(8.0);

    ui.columns(2, |cols| {
        egui::Grid::new("detail-left").num_columns(2).show(&mut cols[0], |ui| {
            for (k, v) in [
                ("Native Name:", &d.native_name),
                ("Population:", &d.population),
                ("Region:", &d.region),
                ("Sub Region:", &d.subregion),
                ("Capital:", &d.capital),
            ] {
                ui.strong(k);
                ui.label(v.as_str());
                ui.end_row();
            }
        });
        egui::Grid::new("detail-right").num_columns(2).show(&mut cols[1], |ui| {
            for (k, v) in [
                ("Top Level Domain:", &d.top_level_domain),
                ("Currencies:", &d.currencies),
                ("Languages:", &d.languages),
            ] {
                ui.strong(k);
                ui.label(v.as_str());
                ui.end_row();
            }
        });
    });

    if !d.borders.is_empty() {
        ui.add_space(10.0);
        ui.horizontal_wrapped(|ui| {
            ui.strong("Border Countries:");
            for b in &d.borders {
                if ui.button(&b.label).clicked() {
                    *nav = Some(NavRequest::Go(Route::Country(b.code.clone())));
                }
            }
        });
    }
}
