use colored::Colorize;
use serde_json::{json, Value};
use smelt_sdk::{
    FieldFilter, Fields, ItemId, Object, RelationMap, RelationTarget, Smelt, SmeltConfig,
};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    match cli.command {
        Command::Demo(args) => cmd_demo(args, config, &cli.format),
        Command::Config => cmd_config(&config),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<SmeltConfig> {
    Ok(match &cli.config {
        Some(path) => SmeltConfig::load(path)?,
        None => SmeltConfig::default(),
    })
}

/// A contact as shown to the user: its scalar fields plus its first address.
struct ContactView {
    contact: Object,
    address: Option<Object>,
}

/// Store state after the demo's create and delete steps.
struct DemoRun {
    smelt: Smelt,
    contacts: Vec<ContactView>,
    /// Contact and address ids of the deleted contact, if any.
    removed: Option<(ItemId, ItemId)>,
}

fn build_demo(args: &DemoArgs, config: SmeltConfig) -> DemoRun {
    let mut smelt = Smelt::with_config(config);
    let mut created = Vec::with_capacity(args.contacts);

    for _ in 0..args.contacts {
        let last_name = args
            .last_name
            .clone()
            .unwrap_or_else(|| ItemId::new().to_string());
        let contact = smelt.create_object(&Fields::from([
            ("firstName".to_string(), args.first_name.clone()),
            ("lastName".to_string(), last_name),
        ]));
        let address = smelt.create_object(&Fields::from([
            ("streetNumber".to_string(), args.street_number.clone()),
            ("streetName".to_string(), args.street_name.clone()),
            ("city".to_string(), args.city.clone()),
            ("state".to_string(), args.state.clone()),
            ("zip".to_string(), args.zip.clone()),
        ]));
        smelt.relate_objects(
            &contact.id,
            &RelationMap::from([("address".to_string(), RelationTarget::One(address.id))]),
        );
        tracing::info!(contact = %contact.id, address = %address.id, "contact created");
        created.push((contact.id, address.id));
    }

    let mut removed = None;
    if args.delete_first && !created.is_empty() {
        let (contact, address) = created.remove(0);
        if args.deep {
            smelt.delete_object_deep(&contact);
        } else {
            smelt.delete_object(&contact);
        }
        tracing::info!(contact = %contact, deep = args.deep, "contact deleted");
        removed = Some((contact, address));
    }

    let filter = FieldFilter::only(["address"]);
    let contacts = created
        .iter()
        .map(|(id, _)| ContactView {
            contact: smelt.read_object(id),
            address: smelt
                .related_objects(id, &filter)
                .remove("address")
                .and_then(|list| list.into_iter().next()),
        })
        .collect();

    DemoRun {
        smelt,
        contacts,
        removed,
    }
}

fn cmd_demo(args: DemoArgs, config: SmeltConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let DemoRun { smelt, contacts, .. } = build_demo(&args, config);

    match format {
        OutputFormat::Json => {
            let mut out = json!({
                "contacts": contacts.iter().map(contact_json).collect::<Vec<_>>(),
                "stats": {
                    "items": smelt.item_count(),
                    "owners": smelt.owner_count(),
                    "edges": smelt.edge_count(),
                },
            });
            if args.dump {
                out["tables"] = serde_json::to_value(smelt.dump())?;
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            for view in &contacts {
                print_contact(view);
            }
            println!(
                "{} {} contact(s), {} item(s), {} edge(s) across {} owner(s)",
                "✓".green().bold(),
                contacts.len().to_string().bold(),
                smelt.item_count().to_string().bold(),
                smelt.edge_count(),
                smelt.owner_count()
            );
            if args.dump {
                println!("\n{}", smelt.dump_json()?);
            }
        }
    }
    Ok(())
}

fn contact_json(view: &ContactView) -> Value {
    let mut value = json!(view.contact);
    if let Some(address) = &view.address {
        value["address"] = json!(address);
    }
    value
}

fn print_contact(view: &ContactView) {
    let field = |o: &Object, name: &str| o.get(name).unwrap_or_default().to_string();
    println!(
        "{} {}  {}",
        field(&view.contact, "firstName").bold(),
        field(&view.contact, "lastName"),
        view.contact.id.short_id().cyan()
    );
    match &view.address {
        Some(a) => {
            println!("  {} {}", field(a, "streetNumber"), field(a, "streetName"));
            println!("  {} {} {}", field(a, "city"), field(a, "state"), field(a, "zip"));
        }
        None => println!("  {}", "(no address)".dimmed()),
    }
}

fn cmd_config(config: &SmeltConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
