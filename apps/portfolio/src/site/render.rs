//! Server-side rendering of the single portfolio page.
//!
//! Markup is assembled with `format!`. Every value that reaches the page goes
//! through [`escape_html`], including the static catalog text.

use chrono::{Datelike, Utc};

use crate::contact::CONTACT_PATH;
use crate::gallery::{Catalog, Category, Project};
use crate::site::profile::Profile;

const STYLESHEET: &str = r#"
body { margin: 0; font-family: 'Inter', sans-serif; background: #0b1120; color: #e5e7eb; }
section { padding: 5rem 1rem; }
.container { max-width: 72rem; margin: 0 auto; }
.hero { min-height: 90vh; display: flex; align-items: center; justify-content: center; text-align: center; }
.hero img { width: 10rem; height: 10rem; border-radius: 50%; object-fit: cover; border: 4px solid rgba(59,130,246,0.5); }
.btn { display: inline-block; padding: 0.75rem 2rem; border-radius: 0.5rem; font-weight: 600; text-decoration: none; color: #fff; background: #2563eb; border: 1px solid #2563eb; }
.btn-outline { background: transparent; }
.btn[disabled] { opacity: 0.6; cursor: not-allowed; }
.card { background: rgba(30,41,59,0.6); border: 1px solid rgba(148,163,184,0.15); border-radius: 0.75rem; padding: 2rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 2rem; }
.chip { display: inline-block; padding: 0.25rem 0.75rem; margin: 0.15rem; border-radius: 9999px; font-size: 0.75rem; background: rgba(37,99,235,0.2); border: 1px solid rgba(37,99,235,0.3); }
.filters { display: flex; flex-wrap: wrap; gap: 0.75rem; justify-content: center; margin-bottom: 3rem; }
.filter { padding: 0.5rem 1.5rem; border-radius: 9999px; text-decoration: none; color: #e5e7eb; background: #1e293b; }
.filter.active { background: #2563eb; }
.bar { height: 0.5rem; background: #1e293b; border-radius: 9999px; overflow: hidden; }
.bar > div { height: 100%; background: linear-gradient(to right, #3b82f6, #2563eb); }
.muted { color: #9ca3af; }
.notice { padding: 0.75rem 1rem; border-radius: 0.5rem; margin-bottom: 1rem; }
.notice.success { background: rgba(34,197,94,0.15); border: 1px solid rgba(34,197,94,0.4); }
.popup { display: none; position: fixed; inset: 0; background: rgba(0,0,0,0.7); align-items: center; justify-content: center; }
.popup:target { display: flex; }
.popup .card { position: relative; text-align: center; max-width: 28rem; }
.popup .close { position: absolute; top: 1rem; right: 1rem; color: inherit; text-decoration: none; }
.notice.error { background: rgba(239,68,68,0.15); border: 1px solid rgba(239,68,68,0.4); }
form label { display: block; font-weight: 600; margin: 1rem 0 0.5rem; }
form input, form textarea { width: 100%; padding: 0.75rem 1rem; border-radius: 0.5rem; background: #1e293b; border: 1px solid #334155; color: inherit; }
"#;

/// Posts the form as JSON, holds the button disabled while in flight, clears
/// the form on success and hides the success notice after five seconds. A new
/// submit cancels the pending hide so it cannot cut a later notice short.
const CONTACT_SCRIPT: &str = r#"
(function () {
  var form = document.getElementById('contact-form');
  if (!form) return;
  var button = form.querySelector('button[type=submit]');
  var ok = document.getElementById('contact-success');
  var failed = document.getElementById('contact-error');
  var hideTimer = null;
  form.addEventListener('submit', async function (event) {
    event.preventDefault();
    if (button.disabled) return;
    button.disabled = true;
    clearTimeout(hideTimer);
    hideTimer = null;
    ok.hidden = true;
    failed.hidden = true;
    var body = {};
    ['name', 'email', 'subject', 'message'].forEach(function (k) { body[k] = form.elements[k].value; });
    try {
      var response = await fetch(form.dataset.endpoint, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!response.ok) throw new Error('status ' + response.status);
      form.reset();
      ok.hidden = false;
      hideTimer = setTimeout(function () { ok.hidden = true; hideTimer = null; }, 5000);
    } catch (err) {
      failed.hidden = false;
    } finally {
      button.disabled = false;
    }
  });
})();
"#;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Link target of a filter button.
pub fn filter_href(category: Category) -> String {
    if category.is_all() {
        "/#projects".to_string()
    } else {
        format!("/?category={}#projects", urlencoding::encode(category.label()))
    }
}

fn chips(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!(r#"<span class="chip">{}</span>"#, escape_html(item)))
        .collect()
}

fn render_hero(profile: &Profile) -> String {
    format!(
        r##"<section class="hero">
  <div>
    <img src="{photo}" alt="{name}" width="160" height="160">
    <p style="color:#60a5fa">Hi, I'm {name}</p>
    <h1>{headline}</h1>
    <p class="muted">{tagline}</p>
    <p>
      <a class="btn" href="{resume}" download="{resume_name}">Download CV</a>
      <a class="btn btn-outline" href="#call-me">Get in Touch</a>
    </p>
    <p>
      <a href="{github}" target="_blank" rel="noopener noreferrer">GitHub</a> ·
      <a href="{linkedin}" target="_blank" rel="noopener noreferrer">LinkedIn</a> ·
      <a href="mailto:{email}">Email</a>
    </p>
  </div>
</section>
<div id="call-me" class="popup" role="dialog" aria-labelledby="call-me-title">
  <div class="card">
    <a class="close" href="#" aria-label="Close">&times;</a>
    <h3 id="call-me-title">Get in Touch</h3>
    <p class="muted">Call me directly for any inquiries</p>
    <a class="btn" href="tel:{phone_link}">{phone}</a>
    <p class="muted">Available for calls and consultations</p>
  </div>
</div>"##,
        photo = escape_html(profile.photo),
        name = escape_html(profile.name),
        headline = escape_html(profile.headline),
        tagline = escape_html(profile.tagline),
        resume = escape_html(profile.resume_path),
        resume_name = escape_html(profile.resume_download_name),
        phone_link = escape_html(&profile.phone.replace(' ', "")),
        phone = escape_html(profile.phone),
        github = escape_html(profile.github),
        linkedin = escape_html(profile.linkedin),
        email = escape_html(profile.email),
    )
}

fn render_about(profile: &Profile) -> String {
    let skills: String = profile
        .skills
        .iter()
        .map(|group| {
            format!(
                r#"<div>
  <p><strong>{name}</strong> <span class="muted">{pct}%</span></p>
  <div class="bar"><div style="width:{pct}%"></div></div>
  <p>{chips}</p>
</div>"#,
                name = escape_html(group.name),
                pct = group.proficiency.min(100),
                chips = chips(group.items),
            )
        })
        .collect();

    let roles: String = profile
        .experience
        .iter()
        .map(|role| {
            let highlights: String = role
                .highlights
                .iter()
                .map(|h| format!("<li>{}</li>", escape_html(h)))
                .collect();
            format!(
                r#"<div>
  <h4>{title} <span class="muted">{period}</span></h4>
  <p style="color:#60a5fa">{company}</p>
  <ul class="muted">{highlights}</ul>
</div>"#,
                title = escape_html(role.title),
                period = escape_html(role.period),
                company = escape_html(role.company),
            )
        })
        .collect();

    let education: String = profile
        .education
        .iter()
        .map(|q| {
            format!(
                r#"<div><h4>{}</h4><p style="color:#60a5fa">{}</p><span class="muted">{}</span></div>"#,
                escape_html(q.title),
                escape_html(q.institution),
                escape_html(q.period),
            )
        })
        .collect();

    format!(
        r#"<section id="about">
  <div class="container">
    <h2>About Me</h2>
    <p class="muted">{summary}</p>
    <div class="grid">
      <div class="card"><h3>Technical Expertise</h3>{skills}</div>
      <div class="card"><h3>Professional Journey</h3>{roles}</div>
    </div>
    <div class="card"><h3>Education &amp; Certifications</h3>{education}</div>
  </div>
</section>"#,
        summary = escape_html(profile.summary),
    )
}

fn render_project(project: &Project) -> String {
    let features: String = project
        .key_features
        .iter()
        .map(|f| format!("<li>{}</li>", escape_html(f)))
        .collect();
    format!(
        r#"<article class="card" data-project="{id}">
  <img src="{image}" alt="{id}" style="width:100%">
  <span class="chip">{badge}</span>
  <p class="muted">{client}</p>
  <h3>{title}</h3>
  <p class="muted">{summary}</p>
  <p><strong>KEY FEATURES:</strong></p>
  <ul class="muted">{features}</ul>
  <p><strong>TECH STACK:</strong></p>
  <p>{stack}</p>
  <a class="btn" href="{url}" target="_blank" rel="noopener noreferrer">View Live Site</a>
</article>"#,
        id = escape_html(project.id),
        image = escape_html(project.image),
        badge = escape_html(project.badge),
        client = escape_html(project.client),
        title = escape_html(project.title),
        summary = escape_html(project.summary),
        stack = chips(project.tech_stack),
        url = escape_html(project.live_url),
    )
}

fn render_projects(catalog: &Catalog, active: Category) -> String {
    let filters: String = Category::ALL_VARIANTS
        .iter()
        .map(|&category| {
            let class = if category == active {
                "filter active"
            } else {
                "filter"
            };
            format!(
                r#"<a class="{class}" href="{href}">{label}</a>"#,
                href = escape_html(&filter_href(category)),
                label = escape_html(category.label()),
            )
        })
        .collect();

    let visible = catalog.visible(active);
    let gallery = if visible.is_empty() {
        r#"<p class="muted" style="text-align:center">No projects in this category yet.</p>"#
            .to_string()
    } else {
        let cards: String = visible.into_iter().map(render_project).collect();
        format!(r#"<div class="grid">{cards}</div>"#)
    };

    format!(
        r#"<section id="projects">
  <div class="container">
    <h2>Featured Projects</h2>
    <p class="muted">Showcasing real-world applications with measurable impact and cutting-edge technology</p>
    <nav class="filters">{filters}</nav>
    {gallery}
  </div>
</section>"#
    )
}

fn render_contact(profile: &Profile) -> String {
    format!(
        r#"<section id="contact">
  <div class="container grid">
    <div class="card">
      <h3>Get In Touch</h3>
      <p class="muted">EMAIL</p><p><a href="mailto:{email}">{email}</a></p>
      <p class="muted">WHATSAPP</p><p>{phone}</p>
      <p class="muted">LOCATION</p><p>{location}</p>
      <h3>Availability Status</h3>
      <p class="muted">Currently accepting new opportunities.</p>
    </div>
    <div class="card">
      <h3>Send a Message</h3>
      <div id="contact-success" class="notice success" hidden>Thanks! Your message has been sent.</div>
      <div id="contact-error" class="notice error" hidden>Sorry, your message could not be sent. Please try again.</div>
      <form id="contact-form" data-endpoint="{endpoint}">
        <label for="name">Name *</label>
        <input id="name" name="name" type="text" placeholder="Your full name" required>
        <label for="email">Email *</label>
        <input id="email" name="email" type="email" placeholder="your.email@example.com" required>
        <label for="subject">Subject *</label>
        <input id="subject" name="subject" type="text" placeholder="What is this about?" required>
        <label for="message">Message *</label>
        <textarea id="message" name="message" rows="5" placeholder="Tell me about your project, timeline, and budget..." required></textarea>
        <p><button class="btn" type="submit">Send Message</button></p>
      </form>
    </div>
  </div>
</section>"#,
        email = escape_html(profile.email),
        phone = escape_html(profile.phone),
        location = escape_html(profile.location),
        endpoint = escape_html(CONTACT_PATH),
    )
}

fn render_footer(profile: &Profile) -> String {
    format!(
        r##"<footer class="container">
  <p><strong>{name}</strong></p>
  <p><a href="#about">About</a> · <a href="#projects">Projects</a> · <a href="#contact">Contact</a></p>
  <p class="muted">© {year} {first}. All rights reserved.</p>
</footer>"##,
        name = escape_html(profile.name),
        first = escape_html(profile.name.split_whitespace().next().unwrap_or(profile.name)),
        year = Utc::now().year(),
    )
}

/// The full portfolio page with the gallery filtered to `active`.
pub fn render_page(profile: &Profile, catalog: &Catalog, active: Category) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{name} | {headline}</title>
  <style>{STYLESHEET}</style>
</head>
<body>
<main>
{hero}
{about}
{projects}
{contact}
</main>
{footer}
<script>{CONTACT_SCRIPT}</script>
</body>
</html>"#,
        name = escape_html(profile.name),
        headline = escape_html(profile.headline),
        hero = render_hero(profile),
        about = render_about(profile),
        projects = render_projects(catalog, active),
        contact = render_contact(profile),
        footer = render_footer(profile),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::profile::PROFILE;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_filter_href_encodes_labels() {
        assert_eq!(filter_href(Category::All), "/#projects");
        assert_eq!(
            filter_href(Category::ReactNext),
            "/?category=React%2FNext.js#projects"
        );
        assert_eq!(
            filter_href(Category::B2bEcommerce),
            "/?category=B2B%20E-commerce#projects"
        );
    }

    #[test]
    fn test_page_shows_only_visible_projects() {
        let html = render_page(&PROFILE, &Catalog::builtin(), Category::WordPress);
        assert!(html.contains(r#"data-project="waverley""#));
        assert!(html.contains(r#"data-project="fastline""#));
        assert!(!html.contains(r#"data-project="isuzu""#));
        assert!(html.contains(r#"<a class="filter active" href="/?category=WordPress#projects">WordPress</a>"#));
    }

    #[test]
    fn test_page_contains_contact_form_and_resume_link() {
        let html = render_page(&PROFILE, &Catalog::builtin(), Category::All);
        assert!(html.contains(r#"data-endpoint="/api/contact""#));
        assert!(html.contains(r#"download="Heshantha_Abeykoon_CV.pdf""#));
        for field in ["name", "email", "subject", "message"] {
            assert!(html.contains(&format!(r#"name="{field}""#)), "{field}");
        }
    }

    #[test]
    fn test_contact_script_cancels_pending_hide_before_resubmit() {
        let clear_at = CONTACT_SCRIPT
            .find("clearTimeout(hideTimer)")
            .expect("pending hide must be cancelled");
        let fetch_at = CONTACT_SCRIPT.find("fetch(").unwrap();
        let schedule_at = CONTACT_SCRIPT.find("hideTimer = setTimeout(").unwrap();
        assert!(clear_at < fetch_at, "cancel must happen before the request");
        assert!(fetch_at < schedule_at);
        assert_eq!(CONTACT_SCRIPT.matches("setTimeout(").count(), 1);
    }

    #[test]
    fn test_get_in_touch_opens_call_popup() {
        let html = render_page(&PROFILE, &Catalog::builtin(), Category::All);
        assert!(html.contains(r##"href="#call-me">Get in Touch</a>"##));
        assert!(html.contains(r#"<div id="call-me" class="popup""#));
        assert!(html.contains(r#"href="tel:+94719412688">+94 71 941 2688</a>"#));
    }

    #[test]
    fn test_empty_gallery_renders_note() {
        static NOTHING: &[Project] = &[];
        let html = render_page(&PROFILE, &Catalog::new(NOTHING), Category::Cms);
        assert!(html.contains("No projects in this category yet."));
    }
}
