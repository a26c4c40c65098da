//! Blueprints command

use anyhow::Result;
use cfngin_blueprints::{available_blueprints, create_blueprint, BlueprintInfo};

use crate::cli::{BlueprintCommands, BlueprintShowArgs};
use crate::output;

pub fn run(cmd: BlueprintCommands) -> Result<()> {
    match cmd {
        BlueprintCommands::List => list(),
        BlueprintCommands::Show(args) => show(args),
    }
}

fn list() -> Result<()> {
    for name in available_blueprints() {
        let blueprint = create_blueprint(name)?;
        println!("{:<20} {}", blueprint.name(), blueprint.description());
    }
    Ok(())
}

fn show(args: BlueprintShowArgs) -> Result<()> {
    let blueprint = create_blueprint(&args.name)?;
    let info = BlueprintInfo::of(blueprint.as_ref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    output::header(info.name);
    println!("{}", info.description);

    output::header("Variables");
    for variable in &info.variables {
        output::kv(
            &variable.name,
            &format!("{} (default: {})", variable.var_type, variable.default),
        );
        if !variable.description.is_empty() {
            println!("      {}", variable.description);
        }
    }

    Ok(())
}
