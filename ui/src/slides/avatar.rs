use dioxus::prelude::*;

pub const AVATAR_SIZE: u32 = 44;
pub const PAIR_AVATAR_SIZE: u32 = 36;

/// Reduce an exporter path to `<folder>/<file>`, e.g.
/// `/home/me/export/avatars/42.jpg` → `avatars/42.jpg`.
/// Both `/` and `\` separate segments.
pub fn asset_path(absolute: &str) -> String {
    let mut segments = absolute.rsplit(['/', '\\']);
    match (segments.next(), segments.next()) {
        (Some(file), Some(folder)) if !folder.is_empty() => format!("{folder}/{file}"),
        (Some(file), _) => file.to_string(),
        _ => String::new(),
    }
}

/// Upper-cased first character of `name`, or `?`.
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

fn resolved_src(path: Option<&str>) -> Option<String> {
    path.map(asset_path).filter(|src| !src.is_empty())
}

/// User picture, replaced by an initial badge when missing or broken.
#[component]
pub fn Avatar(
    path: Option<String>,
    name: String,
    #[props(default = AVATAR_SIZE)] size: u32,
) -> Element {
    let mut failed = use_signal(|| false);

    match resolved_src(path.as_deref()) {
        Some(src) if !failed() => rsx! {
            img {
                class: "avatar",
                src: "{src}",
                alt: "{name}",
                style: "width:{size}px;height:{size}px",
                onerror: move |_| failed.set(true),
            }
        },
        _ => rsx! {
            AvatarPlaceholder { name, size }
        },
    }
}

#[component]
fn AvatarPlaceholder(name: String, size: u32) -> Element {
    let letter = initial(&name);
    let font_size = f64::from(size) / 2.5;
    rsx! {
        div {
            class: "avatar-placeholder",
            style: "width:{size}px;height:{size}px;font-size:{font_size}px",
            "{letter}"
        }
    }
}

/// Sticker picture; falls back to the sticker's emoji label.
#[component]
pub fn StickerImage(path: Option<String>, name: String) -> Element {
    let mut failed = use_signal(|| false);

    match resolved_src(path.as_deref()) {
        Some(src) if !failed() => rsx! {
            img {
                class: "sticker-img",
                src: "{src}",
                alt: "{name}",
                onerror: move |_| failed.set(true),
            }
        },
        _ => rsx! {
            div { class: "emoji-display", "{name}" }
        },
    }
}

/// Small sticker preview that disappears if the image can't load.
#[component]
pub fn StickerThumb(path: String) -> Element {
    let mut failed = use_signal(|| false);
    let src = asset_path(&path);

    if failed() || src.is_empty() {
        return rsx! {};
    }
    rsx! {
        img {
            class: "sticker-img sticker-img--thumb",
            src: "{src}",
            alt: "",
            onerror: move |_| failed.set(true),
        }
    }
}
