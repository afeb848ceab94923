use serde::Serialize;
use std::fs;
use std::path::Path;
use tinytemplate::TinyTemplate;
use tracing::{info, warn};

pub fn render_fragment<T: Serialize>(template: &str, ctx: &T) -> String {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("tpl", template).unwrap();

    // 渲染模板
    tt.render("tpl", ctx).unwrap()
}

pub fn emit(path: Option<&str>, content: &str, force: bool) -> std::io::Result<()> {
    let path = match path {
        Some(p) => p,
        None => {
            print!("{}", content);
            return Ok(());
        }
    };

    if Path::new(path).exists() && !force {
        warn!("Skip existing {}", path);
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;
    info!("Generated {}", path);
    Ok(())
}
