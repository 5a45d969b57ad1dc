use crate::domain::model::Theme;

pub fn render_stylesheet(theme: &Theme) -> String {
    let mut css = format!(
        ":root {{\n  --primary: {};\n  --secondary: {};\n  --accent: {};\n  --dark: {};\n  --light: {};\n}}\n",
        theme.primary, theme.secondary, theme.accent, theme.dark, theme.light
    );
    css.push_str(BASE_CSS);
    css
}

const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: #F9FAFB; color: #1F2937; }
body.modal-open { overflow: hidden; }
.container { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
.hero { padding: 6rem 0; color: #fff; background: linear-gradient(to right, var(--primary), var(--dark)); }
.hero h1 { font-size: 2.25rem; margin: 0 0 1rem; }
.hero .tagline { font-size: 1.25rem; margin: 0 0 1.5rem; }
.services-grid { display: grid; gap: 2rem; padding: 3rem 0; }
@media (min-width: 768px) { .services-grid { grid-template-columns: repeat(3, 1fr); } }
.card { background: #fff; border-radius: 0.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); overflow: hidden; }
.service-card { border-top: 4px solid var(--secondary); transition: box-shadow 0.3s; }
.service-card:hover { box-shadow: 0 10px 25px rgba(0,0,0,0.15); }
.card-image { height: 12rem; overflow: hidden; }
.card-image img, .modal-image { width: 100%; height: 100%; object-fit: cover; }
.card-header, .card-content, .card-footer { padding: 1rem 1.5rem; }
.card-title { color: var(--primary); margin: 0; }
.features { list-style: none; padding: 0; }
.features li { margin: 0.5rem 0; }
.check, .icon { color: var(--secondary); margin-right: 0.5rem; }
.price { color: var(--secondary); font-weight: 600; }
.card-footer { display: flex; gap: 1rem; }
.flex-1 { flex: 1; }
.btn { display: inline-block; padding: 0.5rem 1rem; border-radius: 0.25rem; text-align: center; text-decoration: none; border: 2px solid transparent; }
.btn-primary { background: var(--primary); color: #fff; }
.btn-outline { border-color: var(--primary); color: var(--primary); background: transparent; }
.btn-dark { background: var(--dark); color: #fff; }
.btn-light { background: var(--light); color: var(--primary); }
.contact { max-width: 42rem; margin: 4rem auto; border-top: 4px solid var(--accent); }
.contact a { color: var(--primary); }
.modal-backdrop { position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; padding: 1rem; background: rgba(0,0,0,0.5); }
.modal-dismiss { position: absolute; inset: 0; }
.modal-content { position: relative; background: #fff; border-radius: 0.5rem; max-width: 42rem; width: 100%; max-height: 90vh; overflow-y: auto; padding: 1.5rem; }
.modal-header { display: flex; justify-content: space-between; align-items: flex-start; }
.modal-header h2 { color: var(--primary); margin: 0 0 1rem; }
.modal-close { color: #6B7280; font-size: 1.5rem; text-decoration: none; }
.modal-image { height: 16rem; border-radius: 0.5rem; margin-bottom: 1.5rem; }
.modal-section h3 { color: var(--secondary); }
.modal-summary { background: var(--light); padding: 1rem; border-radius: 0.5rem; border-left: 4px solid var(--accent); }
.modal-actions { display: flex; justify-content: flex-end; gap: 1rem; margin-top: 1.5rem; }
.site-footer { background: var(--dark); color: #fff; padding: 2rem 0; margin-top: 3rem; }
.footer-grid { display: grid; gap: 2rem; }
@media (min-width: 768px) { .footer-grid { grid-template-columns: 1fr 1fr; } }
.copyright { text-align: center; opacity: 0.8; }
.home-link { position: absolute; left: -9999px; }
"#;
