//! HTML rendering of the fleet report.
//!
//! Pure string building, no templating engine: one table row per
//! configured server, one total-summary line, self-contained CSS.

use std::fmt::Write;

use statusgrid_core::{AggregateResult, ServerStatus, Tier};

const STYLE: &str = r#"
body {
    font-family: 'Roboto', Arial, sans-serif;
    background: linear-gradient(135deg, #e0e7ff 0%, #ffffff 100%);
    min-height: 100vh;
}
.table-container {
    width: 95%;
    max-width: 800px;
    margin: 32px auto 0 auto;
    background: #fff;
    box-shadow: 0 4px 6px rgba(0,0,0,0.08);
    border-radius: 8px;
    padding: 16px;
}
table {
    width: 100%;
    border-collapse: collapse;
    background: #fff;
}
th, td {
    border: 1px solid #ececec;
    padding: 10px;
    text-align: left;
}
th {
    background-color: #f2f2f2;
}
.online { color: #00C853; font-weight: bold; }
.online-warning { color: #FFD600; font-weight: bold; }
.online-danger { color: #D32F2F; font-weight: bold; }
.offline { color: #d32f2f; font-weight: bold; }
.total-users {
    text-align: center;
    margin-top: 16px;
    margin-bottom: 20px;
    font-weight: bold;
    font-size: 1.1rem;
}
.status-dot {
    display: inline-block;
    width: 12px;
    height: 12px;
    border-radius: 50%;
    margin-right: 6px;
    vertical-align: middle;
}
.dot-green { background: #00C853; }
.dot-yellow { background: #FFD600; }
.dot-red { background: #D32F2F; }
.badge {
    border: 1px solid #ececec;
    border-radius: 999px;
    margin-left: 8px;
    padding: 2px 8px;
    font-size: 0.85em;
}
"#;

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn text_class(tier: Tier) -> &'static str {
    match tier {
        Tier::Normal => "online",
        Tier::Busy => "online-warning",
        Tier::HighLoad => "online-danger",
        Tier::Offline => "offline",
    }
}

fn dot_class(tier: Tier) -> &'static str {
    match tier {
        Tier::Normal => "dot-green",
        Tier::Busy => "dot-yellow",
        Tier::HighLoad | Tier::Offline => "dot-red",
    }
}

fn push_row(out: &mut String, server: &ServerStatus) {
    let label = escape_html(&server.label);
    match server.online_count {
        Some(count) => {
            let cls = text_class(server.tier);
            let _ = write!(
                out,
                "<tr><td>{label}</td><td class=\"{cls}\">\
                 <span class=\"status-dot {dot}\"></span>\
                 Online {count} people\
                 <span class=\"badge {cls}\">{tier}</span>\
                 </td></tr>\n",
                dot = dot_class(server.tier),
                tier = server.tier.label(),
            );
        }
        None => {
            let _ = write!(
                out,
                "<tr><td>{label}</td><td class=\"offline\">\
                 <span class=\"status-dot dot-red\"></span>\
                 Unable to connect</td></tr>\n",
            );
        }
    }
}

/// Render the full dashboard page.
pub fn page(title: &str, report: &AggregateResult) -> String {
    let mut rows = String::new();
    for server in &report.servers {
        push_row(&mut rows, server);
    }

    let total_cls = text_class(report.total_tier);
    let total_dot = dot_class(report.total_tier);
    let title = escape_html(title);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n\
         <h3 style=\"margin-top: 24px; text-align: center;\">{title}</h3>\n\
         <div class=\"table-container\">\n\
         <table>\n\
         <tr><th>Server Name</th><th>Status</th></tr>\n\
         {rows}\
         </table>\n\
         <div class=\"total-users\">Total online users: \
         <span class=\"{total_cls}\"><span class=\"status-dot {total_dot}\"></span>\
         {total}</span> people</div>\n\
         </div>\n\
         </body>\n\
         </html>\n",
        total = report.total_online,
    )
}
