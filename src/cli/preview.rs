//! Component preview gallery served over HTTP.
//!
//! Renders every component family on one page and exposes per-component
//! pages whose state (variant, size, error, sections) is driven by query
//! parameters, so the full configuration space can be eyeballed without a
//! host application.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::components::{
    Button, CheckBox, Component, DateSelect, Field, Label, RadioButton, Select, Submit, TextArea,
    TimeSelect,
};
use crate::form::FormBuilder;
use crate::html::escape_html;
use crate::variants::{Size, Variant};
use crate::{classes, log_info, log_warn};

pub async fn serve(port: u16) -> anyhow::Result<()> {
    let app = router();
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    log_info!("preview", port = port, status = "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn router() -> Router {
    Router::new()
        .route("/", get(gallery))
        .route("/components.json", get(index_json))
        .route("/preview/{component}", get(component_page))
}

/// Machine-readable index of the preview space, for tooling.
async fn index_json() -> Json<serde_json::Value> {
    Json(json!({
        "components": COMPONENTS,
        "variants": Variant::ALL.map(Variant::name),
        "sizes": Size::ALL.map(Size::name),
        "params": ["variant", "size", "error", "disabled", "left_section", "right_section"],
    }))
}

#[derive(Debug, Default, Deserialize)]
struct PreviewParams {
    variant: Option<Variant>,
    size: Option<Size>,
    #[serde(default)]
    error: bool,
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    left_section: Option<String>,
    #[serde(default)]
    right_section: Option<String>,
}

impl PreviewParams {
    /// Demo form binding reflecting the requested state.
    fn form(&self) -> FormBuilder {
        let form = FormBuilder::new("demo")
            .with_value("name", "Ada Lovelace")
            .with_value("role", "admin");
        if self.error {
            form.with_error("name", "can't be blank")
                .with_error("role", "is not included in the list")
        } else {
            form
        }
    }
}

async fn gallery() -> Html<String> {
    log_info!("preview", page = "gallery");
    Html(page_shell("Components", &gallery_body()))
}

async fn component_page(
    Path(component): Path<String>,
    Query(params): Query<PreviewParams>,
) -> Result<Html<String>, StatusCode> {
    match render_component(&component, &params) {
        Some(body) => {
            log_info!("preview", page = component);
            Ok(Html(page_shell(&component, &card(&component, &body))))
        }
        None => {
            log_warn!("preview", page = component, status = "unknown");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

fn render_component(name: &str, params: &PreviewParams) -> Option<String> {
    let form = params.form();
    let variant = params.variant.unwrap_or_default();
    let size = params.size.unwrap_or_default();

    let html = match name {
        "button" => Button::new("Button")
            .variant(variant)
            .size(size)
            .disabled(params.disabled)
            .render(),
        "submit" => Submit::new()
            .value("Save changes")
            .variant(variant)
            .size(size)
            .disabled(params.disabled)
            .render(),
        "label" => Label::new(&form, "name").render(),
        "text_field" => {
            let mut field = Field::text(&form, "name").placeholder("Your name");
            if let Some(left) = &params.left_section {
                field = field.left_section(escape_html(left));
            }
            if let Some(right) = &params.right_section {
                field = field.right_section(escape_html(right));
            }
            field.disabled(params.disabled).render()
        }
        "select" => Select::from_pairs(&form, "role", [("Admin", "admin"), ("User", "user")])
            .prompt("Choose a role")
            .disabled(params.disabled)
            .render(),
        "date_select" => DateSelect::new(&form, "birthdate").render(),
        "time_select" => TimeSelect::new(&form, "meeting").minute_step(15).render(),
        "check_box" => CheckBox::new(&form, "active").render(),
        "radio_buttons" => {
            RadioButton::collection(&form, "role", [("admin", "Admin"), ("user", "User")])
        }
        "text_area" => TextArea::new(&form, "bio").rows(4).render(),
        _ => return None,
    };
    Some(html)
}

const COMPONENTS: &[&str] = &[
    "button",
    "submit",
    "label",
    "text_field",
    "select",
    "date_select",
    "time_select",
    "check_box",
    "radio_buttons",
    "text_area",
];

fn gallery_body() -> String {
    let mut body = String::new();

    // Button matrix: every variant at every size.
    body.push_str("<section>");
    body.push_str("<h2 class=\"text-lg font-semibold mb-4\">Buttons</h2>");
    for size in Size::ALL {
        body.push_str("<div class=\"flex items-center gap-3 mb-3\">");
        for variant in Variant::ALL {
            body.push_str(
                &Button::new(variant.name())
                    .variant(variant)
                    .size(size)
                    .render(),
            );
        }
        body.push_str("</div>");
    }
    body.push_str("</section>");

    for name in COMPONENTS.iter().filter(|name| **name != "button") {
        let rendered = render_component(name, &PreviewParams::default())
            .unwrap_or_default();
        body.push_str(&card(name, &rendered));
    }

    // The same field again, in its error state.
    let error_params = PreviewParams {
        error: true,
        ..PreviewParams::default()
    };
    if let Some(rendered) = render_component("text_field", &error_params) {
        body.push_str(&card("text_field (errors)", &rendered));
    }

    body
}

fn card(title: &str, body: &str) -> String {
    let mut card = String::new();
    card.push_str("<section class=\"mb-8\">");
    card.push_str(&format!(
        "<h2 class=\"text-lg font-semibold mb-4\">{}</h2>",
        escape_html(title)
    ));
    card.push_str(&format!(
        "<div class=\"{}\">{body}</div>",
        classes!["rounded-lg border border-neutral-200 p-6 bg-white"]
    ));
    card.push_str("</section>");
    card
}

/// Page shell with the standalone Tailwind runtime and the color tokens the
/// component bundles reference.
fn page_shell(title: &str, body: &str) -> String {
    format!(
        r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - tailform</title>
<script src="https://cdn.tailwindcss.com"></script>
<script>
tailwind.config = {{
  darkMode: "media",
  theme: {{
    extend: {{
      colors: {{
        primary: {{ DEFAULT: "#18181b", foreground: "#fafafa" }},
        secondary: {{ DEFAULT: "#f4f4f5", foreground: "#18181b" }},
        destructive: {{ DEFAULT: "#dc2626", foreground: "#fafafa" }},
        muted: {{ DEFAULT: "#f4f4f5", foreground: "#71717a" }},
        ring: "#18181b",
        "focus-ring": "#404040",
        placeholder: "#71717a",
        disabled: {{ DEFAULT: "#fafafa", foreground: "#71717a" }},
        "disabled-ring": "#e4e4e7",
        error: "#7f1d1d",
        "error-ring": "#fca5a5",
        "error-placeholder": "#fca5a5",
        "error-focus-ring": "#ef4444",
      }},
    }},
  }},
}};
</script>
</head>
<body class="bg-neutral-50 text-neutral-900">
<main class="mx-auto max-w-3xl px-6 py-10">
<h1 class="text-2xl font-bold mb-8">{heading}</h1>
{body}
</main>
</body>
</html>
"##,
        title = escape_html(title),
        heading = escape_html(title),
        body = body,
    )
}
