// src/server/page.rs
use crate::config::consts::PLOTLY_CDN;
use crate::store::StoredFile;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Dialogue word charts</title>
<style>
  body { font-family: sans-serif; margin: 1.5rem; }
  #filename { min-width: 16rem; padding: 0.3rem; }
  #graphs { width: 100%; height: 85vh; }
  #error { color: #b00020; }
</style>
"#;

const PAGE_SCRIPT: &str = r#"<script>
  const select = document.getElementById('filename');
  const error = document.getElementById('error');
  async function draw() {
    error.textContent = '';
    const res = await fetch('/figure?file=' + encodeURIComponent(select.value));
    const body = await res.json();
    if (!res.ok) {
      error.textContent = body.error || ('HTTP ' + res.status);
      Plotly.purge('graphs');
      return;
    }
    Plotly.react('graphs', body.data, body.layout, { responsive: true });
  }
  select.addEventListener('change', draw);
  draw();
</script>
"#;

/// The whole page: file dropdown (listing order) plus the chart container.
pub fn render(files: &[StoredFile], default_file: &str) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str(PAGE_HEAD);
    out.push_str(&format!("<script src=\"{PLOTLY_CDN}\"></script>\n</head>\n<body>\n"));

    out.push_str("<select id=\"filename\">\n");
    for f in files {
        let selected = if f.file_name == default_file { " selected" } else { "" };
        out.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>\n",
            escape(&f.file_name),
            escape(&f.label)
        ));
    }
    out.push_str("</select>\n<p id=\"error\"></p>\n<div id=\"graphs\"></div>\n");

    out.push_str(PAGE_SCRIPT);
    out.push_str("</body>\n</html>\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
