use crate::cli::{Cli, Commands, PageCommands};
use crate::domain::models::JsonOut;
use crate::services::output::{print_one, print_out};
use crate::services::pages::{create_page, save_page, show_page};
use crate::services::storage::{PageStore, Workspace};

pub fn handle_page_commands(cli: &Cli, ws: &Workspace) -> anyhow::Result<()> {
    let Commands::Page { command } = &cli.command else {
        unreachable!("routed from main");
    };
    let store = ws.pages();

    match command {
        PageCommands::List => {
            let names = store.list()?;
            print_out(cli.json, &names, |n| n.clone())?;
        }
        PageCommands::Create { name } => {
            let slug = create_page(&store, name)?;
            ws.audit("page_create", serde_json::json!({ "page": slug }));
            print_one(cli.json, slug, |s| format!("created {}", s))?;
        }
        PageCommands::Show { name } => {
            let content = show_page(&store, name)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: serde_json::json!({ "page": name, "content": content })
                    })?
                );
            } else {
                print!("{}", content);
            }
        }
        PageCommands::Save {
            name,
            file,
            content,
        } => {
            let markup = match (file, content) {
                (Some(path), None) => std::fs::read_to_string(path)?,
                (None, Some(inline)) => inline.clone(),
                _ => anyhow::bail!("pass exactly one of --file or --content"),
            };
            let slug = save_page(&store, name, &markup)?;
            ws.audit(
                "page_save",
                serde_json::json!({ "page": slug, "bytes": markup.len() }),
            );
            print_one(cli.json, slug, |s| format!("saved {}", s))?;
        }
    }

    Ok(())
}
