use assetdesk_core::domain::device::Device;

const DEVICE_TEMPLATE: &str = include_str!("web/device.html");
const NOT_FOUND_TEMPLATE: &str = include_str!("web/not_found.html");

/// Escapes text for use inside HTML element content and double-quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Substitutes `{{name}}` placeholders in one pass, so a value is never scanned again.
/// Unknown placeholders are kept as written.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

fn row(label: &str, value: Option<String>) -> String {
    let value = value
        .filter(|v| !v.trim().is_empty())
        .map(|v| escape_html(&v))
        .unwrap_or_else(|| "-".to_string());

    format!("      <tr><th>{}</th><td>{}</td></tr>", label, value)
}

/// Read-only detail page for a device, with its QR image when one is stored.
pub fn device_page(device: &Device) -> String {
    let title = device
        .name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| format!("{} {}", device.brand, device.model));

    let rows = [
        row("ชื่ออุปกรณ์", device.name.clone()),
        row("รหัส", Some(device.code.clone())),
        row("ยี่ห้อ", Some(device.brand.clone())),
        row("รุ่น", Some(device.model.clone())),
        row("ประเภท", device.device_type.map(|t| t.to_string())),
        row("สถานที่", device.location.map(|l| l.to_string())),
        row("ราคา", device.price.map(|p| format!("{:.2} บาท", p))),
        row("IP Address", device.ip_address.clone()),
        row("รายละเอียด", device.details.clone()),
        row(
            "วันที่เพิ่ม",
            Some(device.created_at.format("%d/%m/%Y").to_string()),
        ),
    ]
    .join("\n");

    let qr = device
        .qr_code
        .as_deref()
        .map(|src| {
            format!(
                "    <div class=\"qr\"><img src=\"{}\" alt=\"QR Code\"></div>",
                escape_html(src)
            )
        })
        .unwrap_or_default();

    let title = escape_html(&title);
    fill(
        DEVICE_TEMPLATE,
        &[("title", title.as_str()), ("rows", rows.as_str()), ("qr", qr.as_str())],
    )
}

pub fn not_found_page(identifier: &str) -> String {
    let identifier = escape_html(identifier);
    fill(NOT_FOUND_TEMPLATE, &[("identifier", identifier.as_str())])
}
