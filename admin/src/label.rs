use assetdesk_core::domain::device::Device;

/// Label stock size in millimetres.
pub const LABEL_WIDTH_MM: u32 = 50;
pub const LABEL_HEIGHT_MM: u32 = 30;

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Default output file for a device's label: `label-<code>.html` with the code reduced to a
/// single safe file-name component, or `label-<id>.html` when nothing usable is left.
pub fn label_file_name(device: &Device) -> String {
    let code: String = device
        .code
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let code = code.split('.').filter(|part| !part.is_empty()).collect::<Vec<_>>().join(".");

    if code.chars().all(|c| c == '_') {
        format!("label-{}.html", device.id)
    } else {
        format!("label-{}.html", code)
    }
}

/// Printable single-label page: QR image on the left, code, name and model on the right.
/// The page prints itself once loaded.
pub fn render_label(device: &Device) -> String {
    let qr = device
        .qr_code
        .as_deref()
        .map(|src| format!(r#"<img class="qr" src="{}" alt="QR">"#, escape(src)))
        .unwrap_or_default();
    let name = device.name.as_deref().unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="th">
<head>
<meta charset="utf-8">
<title>{code}</title>
<style>
@page {{ size: {w}mm {h}mm; margin: 0; }}
body {{ margin: 0; font-family: sans-serif; }}
.label {{ width: {w}mm; height: {h}mm; display: flex; align-items: center; gap: 1.5mm; padding: 1.5mm; box-sizing: border-box; overflow: hidden; }}
.qr {{ width: 26mm; height: 26mm; }}
.info {{ font-size: 7pt; line-height: 1.25; }}
.code {{ font-size: 9pt; font-weight: bold; }}
</style>
</head>
<body onload="window.print()">
<div class="label">
{qr}
<div class="info">
<div class="code">{code}</div>
<div>{name}</div>
<div>{brand} {model}</div>
</div>
</div>
</body>
</html>
"#,
        code = escape(&device.code),
        name = escape(name),
        brand = escape(&device.brand),
        model = escape(&device.model),
        w = LABEL_WIDTH_MM,
        h = LABEL_HEIGHT_MM,
        qr = qr,
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn device() -> Device {
        let now = Utc::now();
        Device {
            id: 1,
            code: "PC-001".to_string(),
            name: Some("Tom & Jerry".to_string()),
            brand: "Dell".to_string(),
            model: "Latitude".to_string(),
            device_type: None,
            location: None,
            price: None,
            details: None,
            ip_address: None,
            qr_code: Some("data:image/png;base64,AAAA".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_label_layout() {
        let html = render_label(&device());

        assert!(html.contains("size: 50mm 30mm"));
        assert!(html.contains(r#"src="data:image/png;base64,AAAA""#));
        assert!(html.contains(r#"<div class="code">PC-001</div>"#));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains("Dell Latitude"));
    }

    #[test]
    fn test_label_file_name_is_one_component() {
        let mut device = device();
        assert_eq!(label_file_name(&device), "label-PC-001.html");

        device.code = "IT/2567/001".to_string();
        assert_eq!(label_file_name(&device), "label-IT_2567_001.html");

        device.code = "../../etc/passwd".to_string();
        let name = label_file_name(&device);
        assert!(!name.contains('/'));
        assert!(!name.contains(".."));
        assert_eq!(name, "label-_._etc_passwd.html");

        device.code = r"a\b".to_string();
        assert_eq!(label_file_name(&device), "label-a__b.html");
    }

    #[test]
    fn test_label_file_name_falls_back_to_id() {
        let mut device = device();
        device.id = 42;

        for code in ["..", "/", "  ", "../"] {
            device.code = code.to_string();
            assert_eq!(label_file_name(&device), "label-42.html", "code {code:?}");
        }
    }

    #[test]
    fn test_label_without_qr() {
        let mut device = device();
        device.qr_code = None;

        assert!(!render_label(&device).contains("<img"));
    }
}
