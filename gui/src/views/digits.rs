// Digit recognition: upload an image, preview it, and show the model's
// highest-scoring class with its raw confidence.
#![allow(non_snake_case)]
use base64::{engine::general_purpose, Engine as _};
use dioxus::prelude::*;
use shared::models::Prediction;

use crate::config::theme::ThemePalette;
use crate::services::EngineHandle;

#[derive(Debug, Clone, PartialEq)]
struct UploadedImage {
    name: String,
    data_uri: String,
}

fn mime_for(file_name: &str) -> &'static str {
    if file_name.to_ascii_lowercase().ends_with(".png") {
        "image/png"
    } else {
        "image/jpeg"
    }
}

#[component]
pub fn Digits() -> Element {
    let engine = use_context::<EngineHandle>();
    let palette = use_context::<ThemePalette>();

    let model_available = engine.digits.is_some();

    let mut upload = use_signal(|| None::<UploadedImage>);
    let mut outcome = use_signal(|| None::<Result<Prediction, String>>);

    let on_file = move |evt: FormEvent| {
        let engine = engine.clone();
        if let Some(file_engine) = evt.files() {
            spawn(async move {
                let Some(name) = file_engine.files().first().cloned() else {
                    return;
                };
                let Some(bytes) = file_engine.read_file(&name).await else {
                    outcome.set(Some(Err(format!("Could not read {}", name))));
                    return;
                };
                upload.set(Some(UploadedImage {
                    data_uri: format!(
                        "data:{};base64,{}",
                        mime_for(&name),
                        general_purpose::STANDARD.encode(&bytes)
                    ),
                    name,
                }));
                let result = match engine.digits.as_ref() {
                    Some(service) => service.predict_bytes(&bytes).map_err(|e| e.to_string()),
                    None => Err("Digit model is not available.".to_string()),
                };
                outcome.set(Some(result));
            });
        }
    };

    let model_notice = if model_available {
        None
    } else {
        Some(rsx! {
            p {
                style: "color: {palette.error};",
                "The digit model could not be loaded at startup; prediction is disabled."
            }
        })
    };

    let preview = upload().map(|image| {
        rsx! {
            div {
                style: "margin-top: 12px;",
                img {
                    src: "{image.data_uri}",
                    alt: "{image.name}",
                    style: "max-width: 280px; max-height: 280px; border: 1px solid {palette.border}; border-radius: 4px;",
                }
                p { style: "color: {palette.muted}; font-size: 0.85em;", "{image.name}" }
            }
        }
    });

    let result_line = outcome().map(|result| match result {
        Ok(prediction) => {
            let confidence = format!("{:.2}", prediction.confidence);
            rsx! {
                p {
                    style: "font-size: 1.1em;",
                    "Predicted Digit: {prediction.digit} with confidence {confidence}"
                }
            }
        }
        Err(message) => rsx! {
            p { style: "color: {palette.error};", "Prediction failed: {message}" }
        },
    });

    rsx! {
        div {
            style: "padding: 16px;",
            h2 { "Digit Recognition App" }
            p { style: "color: {palette.muted};", "Upload an image of a digit" }
            {model_notice}
            input {
                r#type: "file",
                accept: ".png,.jpg,.jpeg",
                onchange: on_file,
            }
            {preview}
            {result_line}
        }
    }
}
