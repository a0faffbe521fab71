use std::time::{Duration, Instant};

use eframe::{egui, Frame};
use egui::{Color32, Context};

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Result;

use rs_blank_core::sheet::blank_count::{DEFAULT_BLANKS, MAX_BLANKS, MIN_BLANKS};
use rs_blank_core::SheetView;

/// How long a notification stays on screen.
const TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
    base_url: String,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    ///
    /// The server address comes from `RS_BLANK_URL` (default `http://127.0.0.1:5000`).
    fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        let base_url = std::env::var("RS_BLANK_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_owned())
            .trim_end_matches('/')
            .to_owned();
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and decodes the sheet returned by the server.
    fn send(&self, request: RequestBuilder) -> Result<SheetView> {
        request.send()?.error_for_status()?.json::<SheetView>()
    }

    /// Sends a GET request to `/v1/sheet`.
    fn get_sheet(&self) -> Result<SheetView> {
        self.send(self.client.get(self.url("/v1/sheet")))
    }

    /// Sends a PUT request to `/v1/blank_count`.
    fn put_blank_count(&self, count: usize) -> Result<SheetView> {
        self.send(
            self.client
                .put(self.url("/v1/blank_count"))
                .query(&[("count", count.to_string())]),
        )
    }

    /// Sends a PUT request to `/v1/rows/{id}/blanks/{index}` with the raw value as body.
    fn put_blank(&self, id: &str, index: usize, value: &str) -> Result<SheetView> {
        self.send(
            self.client
                .put(self.url(&format!("/v1/rows/{id}/blanks/{index}")))
                .body(value.to_owned()),
        )
    }

    /// Sends a POST request to `/v1/rows`.
    fn post_row(&self) -> Result<SheetView> {
        self.send(self.client.post(self.url("/v1/rows")))
    }

    /// Sends a DELETE request to `/v1/rows/{id}`.
    fn delete_row(&self, id: &str) -> Result<SheetView> {
        self.send(self.client.delete(self.url(&format!("/v1/rows/{id}"))))
    }

    /// Sends a POST request to `/v1/clear`.
    fn post_clear(&self) -> Result<SheetView> {
        self.send(self.client.post(self.url("/v1/clear")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn color(self) -> Color32 {
        match self {
            ToastKind::Success => Color32::from_rgb(22, 163, 74),
            ToastKind::Error => Color32::from_rgb(220, 38, 38),
            ToastKind::Info => Color32::from_rgb(37, 99, 235),
        }
    }
}

/// Transient notification shown in the top-right corner.
struct Toast {
    message: String,
    kind: ToastKind,
    expires: Instant,
}

/// Editable copy of one server row.
struct RowBuffer {
    id: String,
    values: Vec<String>,
}

/// Global UI state (MUST persist between frames in egui).
struct BlankUI {
    rest: RESTContext,
    blank_count: usize,
    rows: Vec<RowBuffer>,
    expression: String,
    copyable: bool,
    toasts: Vec<Toast>,
}

impl BlankUI {
    /// Initializes the UI and fetches the current sheet.
    fn new() -> Result<Self> {
        let mut ui = Self {
            rest: RESTContext::new()?,
            blank_count: DEFAULT_BLANKS,
            rows: Vec::new(),
            expression: String::new(),
            copyable: false,
            toasts: Vec::new(),
        };
        let sheet = ui.rest.get_sheet();
        ui.apply(sheet);
        Ok(ui)
    }

    fn toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toasts.push(Toast {
            message: message.into(),
            kind,
            expires: Instant::now() + TOAST_LIFETIME,
        });
    }

    /// Replaces the local copy with the sheet returned by the server.
    ///
    /// Errors are reported as notifications and leave the local copy untouched.
    fn apply(&mut self, response: Result<SheetView>) -> bool {
        match response {
            Ok(view) => {
                self.copyable = view.copyable_expression().is_some();
                self.blank_count = view.blank_count;
                self.rows = view
                    .rows
                    .iter()
                    .map(|row| RowBuffer {
                        id: row.id().to_owned(),
                        values: row.blanks().map(str::to_owned).collect(),
                    })
                    .collect();
                self.expression = view.expression;
                true
            }
            Err(e) => {
                log::error!("request failed: {e}");
                self.toast(format!("Error: {e}"), ToastKind::Error);
                false
            }
        }
    }

    fn put_blank_count(&mut self) {
        let response = self.rest.put_blank_count(self.blank_count);
        self.apply(response);
    }

    fn put_blank(&mut self, id: &str, index: usize, value: &str) {
        let response = self.rest.put_blank(id, index, value);
        self.apply(response);
    }

    fn post_row(&mut self) {
        let response = self.rest.post_row();
        self.apply(response);
    }

    fn delete_row(&mut self, id: &str) {
        if self.rows.len() <= 1 {
            self.toast("至少需要保留一个答案组", ToastKind::Info);
            return;
        }
        let response = self.rest.delete_row(id);
        self.apply(response);
    }

    fn post_clear(&mut self) {
        let response = self.rest.post_clear();
        if self.apply(response) {
            self.toast("已清空所有内容", ToastKind::Success);
        }
    }

    fn copy_expression(&mut self, ctx: &Context) {
        if !self.copyable {
            return;
        }
        ctx.copy_text(self.expression.clone());
        self.toast("结果已复制到剪贴板", ToastKind::Success);
    }

    /// Draws live notifications and drops expired ones.
    fn show_toasts(&mut self, ctx: &Context) {
        let now = Instant::now();
        self.toasts.retain(|toast| toast.expires > now);
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.colored_label(toast.kind.color(), toast.message.as_str());
                    });
                }
            });

        // Keep repainting so toasts disappear without user input
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl eframe::App for BlankUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        let mut edited: Option<(String, usize, String)> = None;
        let mut removed: Option<String> = None;
        let mut count_changed = false;
        let mut add_clicked = false;
        let mut clear_clicked = false;
        let mut copy_clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("多解逻辑表达式生成器");
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("空格数量设置 (1-10):");
                count_changed = ui
                    .add(
                        egui::DragValue::new(&mut self.blank_count)
                            .range(MIN_BLANKS..=MAX_BLANKS)
                            .speed(1),
                    )
                    .changed();
                add_clicked = ui.button("添加答案组").clicked();
                clear_clicked = ui.button("全部清空").clicked();
            });
            ui.separator();

            egui::ScrollArea::both().max_height(320.0).show(ui, |ui| {
                egui::Grid::new("answer_grid")
                    .num_columns(self.blank_count + 2)
                    .spacing([12.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("组别");
                        for i in 1..=self.blank_count {
                            ui.strong(format!("空格 {i}"));
                        }
                        ui.strong("操作");
                        ui.end_row();

                        for (row_index, row) in self.rows.iter_mut().enumerate() {
                            ui.label(format!("#{}", row_index + 1));
                            for (slot, value) in row.values.iter_mut().enumerate() {
                                let response = ui.add(
                                    egui::TextEdit::singleline(value)
                                        .hint_text(format!("空{}", slot + 1))
                                        .desired_width(120.0),
                                );
                                if response.changed() {
                                    edited = Some((row.id.clone(), slot + 1, value.clone()));
                                }
                            }
                            if ui.button("删除").clicked() {
                                removed = Some(row.id.clone());
                            }
                            ui.end_row();
                        }
                    });
            });
            ui.separator();

            ui.horizontal(|ui| {
                ui.strong("生成结果");
                copy_clicked = ui
                    .add_enabled(self.copyable, egui::Button::new("复制结果"))
                    .clicked();
            });
            if self.expression.is_empty() {
                ui.label("等待输入...");
            } else {
                ui.monospace(self.expression.as_str());
            }
        });

        if count_changed {
            self.put_blank_count();
        }
        if let Some((id, index, value)) = edited {
            self.put_blank(&id, index, &value);
        }
        if let Some(id) = removed {
            self.delete_row(&id);
        }
        if add_clicked {
            self.post_row();
        }
        if clear_clicked {
            self.post_clear();
        }
        if copy_clicked {
            self.copy_expression(ctx);
        }

        self.show_toasts(ctx);
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 480.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "rs-blank",
        options,
        Box::new(|_| Ok(Box::new(BlankUI::new()?))),
    )
}
