//! The dashboard: currency chips, top-coin cards, detail card and chart.

use eframe::egui::{
    CentralPanel, Context, CursorIcon, Image, OpenUrl, Response, RichText, ScrollArea, Sense,
    Spinner, Ui, Vec2,
};
use strum::IntoEnumIterator;

use crate::{
    app::{App, FetchStatus},
    chart::PeriodChange,
    config::{CURRENCIES, CurrencyFormatter, PLOT_CONFIG},
    domain::{Coin, Currency, Period, exchange_name},
    ui::{
        UI_CONFIG, UI_TEXT, UiStyleExt,
        chart_view::{ChartInput, ChartView, show_period_chips, show_placeholder},
    },
    utils::format_quantity,
};

/// User intent collected while drawing, applied once the frame is laid out.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HomeAction {
    SelectCoin(String),
    SelectCurrency(Currency),
    ChangePeriod(PeriodChange),
    OpenLink(String),
}

impl App {
    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let mut actions = Vec::new();

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    render_header(ui, self.selected_currency, &mut actions);
                    ui.add_space(12.0);

                    if let Some(err) = &self.load_error {
                        ui.colored_label(PLOT_CONFIG.color_loss, err.as_str());
                        return;
                    }
                    if self.coins.is_empty() {
                        ui.label_subdued(&UI_TEXT.home_no_coins);
                        return;
                    }

                    render_coin_cards(
                        ui,
                        &self.coins,
                        self.selected_coin_id.as_deref(),
                        self.selected_currency,
                        &mut actions,
                    );
                    ui.add_space(16.0);

                    let Some(coin) = self
                        .selected_coin_id
                        .as_deref()
                        .and_then(|id| self.coins.iter().find(|c| c.id == id))
                    else {
                        ui.label_subdued(&UI_TEXT.home_select_coin);
                        return;
                    };

                    render_coin_detail(ui, coin, self.selected_currency, &mut actions);
                    ui.add_space(16.0);
                    render_chart_section(
                        ui,
                        &mut self.chart_view,
                        self.history.status(),
                        self.period,
                        self.selected_currency,
                        &mut actions,
                    );
                });
            });

        for action in actions {
            self.apply_home_action(ctx, action);
        }
    }

    fn apply_home_action(&mut self, ctx: &Context, action: HomeAction) {
        match action {
            HomeAction::SelectCoin(id) => self.handle_select_coin(&id),
            HomeAction::SelectCurrency(currency) => self.handle_select_currency(currency),
            HomeAction::ChangePeriod(change) => self.handle_period_change(change),
            HomeAction::OpenLink(url) => ctx.open_url(OpenUrl::new_tab(url)),
        }
    }
}

fn render_header(ui: &mut Ui, active: Currency, actions: &mut Vec<HomeAction>) {
    ui.horizontal(|ui| {
        ui.heading(RichText::new(&UI_TEXT.home_heading).color(UI_CONFIG.colors.heading));
        ui.add_space(24.0);
        ui.label_subdued(&UI_TEXT.home_currency_label);
        for currency in Currency::iter() {
            if ui.chip(&currency.to_string(), currency == active).clicked() {
                actions.push(HomeAction::SelectCurrency(currency));
            }
        }
    });
}

fn render_coin_cards(
    ui: &mut Ui,
    coins: &[Coin],
    selected_id: Option<&str>,
    currency: Currency,
    actions: &mut Vec<HomeAction>,
) {
    ScrollArea::horizontal()
        .id_salt("coin_cards")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for coin in coins {
                    let is_selected = selected_id == Some(coin.id.as_str());
                    if coin_card(ui, coin, is_selected, currency).clicked() {
                        actions.push(HomeAction::SelectCoin(coin.id.clone()));
                    }
                }
            });
        });
}

fn coin_card(ui: &mut Ui, coin: &Coin, is_selected: bool, currency: Currency) -> Response {
    let icon_size = Vec2::splat(UI_CONFIG.coin_icon_size);
    UI_CONFIG
        .card_frame(is_selected)
        .show(ui, |ui| {
            ui.set_width(UI_CONFIG.coin_card_width);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(UI_CONFIG.rank_label(coin.rank))
                            .small()
                            .strong()
                            .color(UI_CONFIG.rank_color(coin.rank)),
                    );
                    ui.add(Image::new(coin.icon.as_str()).fit_to_exact_size(icon_size));
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&coin.name)
                                .strong()
                                .color(UI_CONFIG.colors.heading),
                        );
                        ui.label_subdued(&coin.symbol);
                    });
                });
                ui.add_space(6.0);
                ui.label_subdued(&UI_TEXT.card_market_cap);
                ui.label(RichText::new(CURRENCIES.format(currency, coin.market_cap)).strong());
            });
        })
        .response
        .interact(Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand)
}

fn render_coin_detail(
    ui: &mut Ui,
    coin: &Coin,
    currency: Currency,
    actions: &mut Vec<HomeAction>,
) {
    let icon_size = Vec2::splat(UI_CONFIG.detail_icon_size);
    UI_CONFIG.card_frame(false).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.add(Image::new(coin.icon.as_str()).fit_to_exact_size(icon_size));
            ui.vertical(|ui| {
                ui.heading(RichText::new(&coin.name).color(UI_CONFIG.colors.heading));
                ui.label_subdued(&coin.symbol);
                ui.label(
                    RichText::new(CURRENCIES.format(currency, coin.price))
                        .size(22.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
            });
            ui.add_space(24.0);
            ui.vertical(|ui| {
                ui.price_change_chip(&UI_TEXT.detail_price_change_1h, coin.price_change_1h);
                ui.price_change_chip(&UI_TEXT.detail_price_change_1d, coin.price_change_1d);
                ui.price_change_chip(&UI_TEXT.detail_price_change_1w, coin.price_change_1w);
            });
            ui.add_space(24.0);
            ui.rank_avatar(coin.rank)
                .on_hover_text(format!("{} {}", UI_TEXT.detail_rank_prefix, coin.rank));
        });

        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            ui.item_card(&UI_TEXT.detail_volume, &format_quantity(coin.volume));
            ui.item_card(
                &UI_TEXT.detail_market_cap,
                &CURRENCIES.format(currency, coin.market_cap),
            );
            ui.item_card(
                &UI_TEXT.detail_available_supply,
                &format_quantity(coin.available_supply),
            );
            ui.item_card(&UI_TEXT.detail_total_supply, &format_quantity(coin.total_supply));
        });

        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            for (label, url) in coin_links(coin) {
                if ui.link_chip(&label, &url).clicked() {
                    actions.push(HomeAction::OpenLink(url));
                }
            }
        });
    });
}

/// Website, Twitter, then one chip per exchange named after its host.
pub(crate) fn coin_links(coin: &Coin) -> Vec<(String, String)> {
    let mut links = Vec::with_capacity(coin.exchanges.len() + 2);
    if let Some(url) = &coin.website_url {
        links.push((UI_TEXT.link_website.clone(), url.clone()));
    }
    if let Some(url) = &coin.twitter_url {
        links.push((UI_TEXT.link_twitter.clone(), url.clone()));
    }
    links.extend(
        coin.exchanges
            .iter()
            .map(|url| (exchange_name(url).to_string(), url.clone())),
    );
    links
}

fn render_chart_section(
    ui: &mut Ui,
    chart_view: &mut ChartView,
    status: &FetchStatus,
    period: Period,
    currency: Currency,
    actions: &mut Vec<HomeAction>,
) {
    ui.label_subheader(&UI_TEXT.chart_heading);

    let change = match status {
        FetchStatus::Loaded(data) => {
            let input = ChartInput {
                series: &data.series,
                extrema: data.extrema.as_ref(),
                active_period: period,
                currency,
                formatter: &CURRENCIES,
            };
            chart_view.show(ui, &input)
        }
        FetchStatus::Pending => {
            show_placeholder(ui, |ui| {
                ui.add(Spinner::new().size(32.0));
                ui.label_subdued(&UI_TEXT.chart_loading);
            });
            show_period_chips(ui, period)
        }
        FetchStatus::Failed(reason) => {
            show_placeholder(ui, |ui| {
                ui.colored_label(PLOT_CONFIG.color_loss, UI_TEXT.chart_failed.as_str());
                ui.label_subdued(reason);
            });
            show_period_chips(ui, period)
        }
        FetchStatus::Idle => None,
    };

    if let Some(change) = change {
        actions.push(HomeAction::ChangePeriod(change));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_demo_coins;

    #[test]
    fn links_list_website_twitter_then_exchanges() {
        let coins = load_demo_coins().unwrap();
        let bitcoin = coins.iter().find(|c| c.id == "bitcoin").unwrap();
        let links = coin_links(bitcoin);

        assert_eq!(links[0].0, "Website");
        assert_eq!(links[1].0, "Twitter");
        assert_eq!(links.len(), 2 + bitcoin.exchanges.len());
        for ((label, url), exchange) in links[2..].iter().zip(&bitcoin.exchanges) {
            assert_eq!(url, exchange);
            assert_eq!(label, exchange_name(exchange));
        }
    }

    #[test]
    fn missing_links_are_skipped() {
        let coin = Coin {
            website_url: None,
            twitter_url: None,
            exchanges: vec!["https://www.kraken.com/prices".to_string()],
            ..load_demo_coins().unwrap().remove(0)
        };
        assert_eq!(
            coin_links(&coin),
            vec![(
                "www.kraken.com".to_string(),
                "https://www.kraken.com/prices".to_string()
            )]
        );
    }
}
