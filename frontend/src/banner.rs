/// Console watermark: text and the CSS applied to it with `%c`.
pub const LINES: [(&str, &str); 3] = [
    (
        " NexTech Industries ",
        "background: #007AFF; color: white; font-size: 20px; font-weight: bold; padding: 10px;",
    ),
    (
        " Simulador de Procesos Industriales v2.0 ",
        "background: #1D1D1F; color: white; font-size: 14px; padding: 5px;",
    ),
    (
        " Desarrollado con ❤️ en León, Guanajuato ",
        "color: #424245; font-size: 12px;",
    ),
];

pub fn format_line(text: &str) -> String {
    format!("%c{text}")
}

pub fn print() {
    for (text, style) in LINES {
        gloo_console::log!(format_line(text), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_carries_one_style_directive() {
        for (text, style) in LINES {
            let line = format_line(text);
            assert_eq!(line.matches("%c").count(), 1);
            assert!(style.ends_with(';'));
        }
    }

    #[test]
    fn brand_comes_first() {
        assert_eq!(format_line(LINES[0].0), "%c NexTech Industries ");
    }
}
