//! Built-in shell commands
//!
//! `whoami`, `im`, `mkdir`, `ls`, `lspdfs`, `lstex`, `getCC`, `setCC`,
//! `compile`, `config`, `help` and `EOF`.

use super::{ArgumentPolicy, CommandContext, CommandRegistry, Flow};
use crate::config::store::{render_document, ConfigStore};
use crate::error::{Error, Result};
use crate::platform::FilesystemOps;
use crate::session::Compiler;
use crate::validation::validate_name;
use std::path::Path;

/// Shown by the listing commands when nothing is visible
pub const EMPTY_LISTING: &str = "No files or directories.";

/// Build a registry holding every built-in command
pub fn builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}

/// Register every built-in command into `registry`
pub fn register_builtins(registry: &mut CommandRegistry) {
    use ArgumentPolicy::{Any, ExactlyOne, NoArgs};

    registry.register(
        "whoami",
        NoArgs,
        "whoami",
        "Show the current directory relative to the root.",
        whoami,
    );
    registry.register(
        "im",
        Any,
        "im [name]",
        "Enter project <name>, creating it after confirmation. Without a name return to the root.",
        im,
    );
    registry.register(
        "mkdir",
        ExactlyOne,
        "mkdir <dir>",
        "Create a directory inside the current project. Not allowed in the root.",
        mkdir,
    );
    registry.register("ls", NoArgs, "ls", "List files and directories.", ls);
    registry.register("lspdfs", NoArgs, "lspdfs", "List only *.pdf files.", lspdfs);
    registry.register("lstex", NoArgs, "lstex", "List only *.tex files.", lstex);
    registry.register("getCC", NoArgs, "getCC", "Show the selected compiler.", get_cc);
    registry.register(
        "setCC",
        ExactlyOne,
        "setCC pdfcslatex|pdflatex|cslatex|latex|tex",
        "Select the compiler used by compile.",
        set_cc,
    );
    registry.register(
        "compile",
        ExactlyOne,
        "compile <file>",
        "Compile a TeX source file with the selected compiler.",
        compile,
    );
    registry.register(
        "config",
        Any,
        "config [key=value,key=value,...]",
        "Without arguments show the project configuration. With comma-separated \
         key=value pairs store them in its main section, creating the file if needed.",
        config,
    );
    registry.register(
        "help",
        Any,
        "help [command]",
        "List commands or show help for one command.",
        help,
    );
    registry.register("EOF", Any, "EOF", "Exit the shell.", |_, _| Ok(Flow::Exit));
}

fn whoami(ctx: &mut CommandContext<'_>, _args: &str) -> Result<Flow> {
    let location = ctx.session.location();
    ctx.println(format!("You are in {}", location))?;
    Ok(Flow::Continue)
}

fn im(ctx: &mut CommandContext<'_>, name: &str) -> Result<Flow> {
    validate_name(name)?;

    if name.is_empty() {
        ctx.println("Entering root dir!")?;
        ctx.fs.change_dir(ctx.session.root())?;
        ctx.session.enter_root();
        return Ok(Flow::Continue);
    }

    let path = ctx.session.project_path(name);
    if !ctx.fs.is_dir(&path) {
        if ctx.fs.exists(&path) {
            return Err(Error::NotADirectory { path });
        }
        if !ctx.confirm.confirm(&mut *ctx.input, &mut *ctx.out, name)? {
            debug!("Creation of {} declined", path.display());
            return Ok(Flow::Continue);
        }
        ctx.fs.create_dir(&path)?;
    }

    ctx.fs.change_dir(&path)?;
    ctx.session.enter_project(name);
    Ok(Flow::Continue)
}

fn mkdir(ctx: &mut CommandContext<'_>, name: &str) -> Result<Flow> {
    validate_name(name)?;
    if ctx.session.is_at_root() {
        return Err(Error::RootRestricted);
    }
    let path = ctx.session.current_directory().join(name);
    ctx.fs.create_dir(&path)?;
    Ok(Flow::Continue)
}

fn ls(ctx: &mut CommandContext<'_>, _args: &str) -> Result<Flow> {
    let dir = ctx.session.current_directory();
    let names = ctx.fs.list_entries(dir)?;
    let listing = format_listing(ctx.fs, dir, &names);
    ctx.println(listing)?;
    Ok(Flow::Continue)
}

fn lspdfs(ctx: &mut CommandContext<'_>, _args: &str) -> Result<Flow> {
    list_extension(ctx, "pdf")
}

fn lstex(ctx: &mut CommandContext<'_>, _args: &str) -> Result<Flow> {
    list_extension(ctx, "tex")
}

fn list_extension(ctx: &mut CommandContext<'_>, extension: &str) -> Result<Flow> {
    let dir = ctx.session.current_directory();
    let names = ctx.fs.list_by_extension(dir, extension)?;
    let listing = format_listing(ctx.fs, dir, &names);
    ctx.println(listing)?;
    Ok(Flow::Continue)
}

/// Render entry names of `dir` as one space-separated line
///
/// Hidden entries are dropped and directories get a trailing `/`.
pub fn format_listing(fs: &dyn FilesystemOps, dir: &Path, names: &[String]) -> String {
    let visible: Vec<String> = names
        .iter()
        .filter(|name| !name.starts_with('.'))
        .map(|name| {
            if fs.is_dir(&dir.join(name)) {
                format!("{}/", name)
            } else {
                name.clone()
            }
        })
        .collect();

    if visible.is_empty() {
        EMPTY_LISTING.to_string()
    } else {
        visible.join(" ")
    }
}

fn get_cc(ctx: &mut CommandContext<'_>, _args: &str) -> Result<Flow> {
    let compiler = ctx.session.compiler();
    ctx.println(compiler.to_string())?;
    Ok(Flow::Continue)
}

fn set_cc(ctx: &mut CommandContext<'_>, name: &str) -> Result<Flow> {
    let compiler: Compiler = name.parse()?;
    ctx.session.set_compiler(compiler);
    Ok(Flow::Continue)
}

fn compile(ctx: &mut CommandContext<'_>, file: &str) -> Result<Flow> {
    let working_dir = ctx.session.current_directory();
    let path = working_dir.join(file);
    if !ctx.fs.is_file(&path) {
        return Err(Error::FileNotFound { path: file.into() });
    }

    let compiler = ctx.session.compiler();
    let status = ctx.process.run_compiler(compiler, &path, working_dir)?;
    let report = match status.code {
        Some(code) => format!("{} exited with status {}", compiler, code),
        None => format!("{} terminated by signal", compiler),
    };
    if !status.success() {
        warn!("{}", report);
    }
    ctx.println(report)?;
    Ok(Flow::Continue)
}

fn config(ctx: &mut CommandContext<'_>, args: &str) -> Result<Flow> {
    let store = ConfigStore::new(ctx.session.current_directory(), ctx.config_file_name);

    if args.is_empty() {
        match store.load()? {
            Some(document) => {
                for line in render_document(&document) {
                    ctx.println(line)?;
                }
            }
            None => ctx.println(
                "No configuration file in current working directory. Nothing to print.",
            )?,
        }
        return Ok(Flow::Continue);
    }

    let report = store.assign(args)?;
    for rejected in &report.rejected {
        ctx.println(rejected.to_string())?;
    }
    for assignment in &report.applied {
        ctx.println(format!("Set {} = {}", assignment.key, assignment.value))?;
    }
    Ok(Flow::Continue)
}

fn help(ctx: &mut CommandContext<'_>, topic: &str) -> Result<Flow> {
    if topic.is_empty() {
        let header = "Documented commands (type help <command>):";
        let names = ctx.registry.names().collect::<Vec<_>>().join("  ");
        ctx.println(header)?;
        ctx.println("=".repeat(header.len()))?;
        ctx.println(names)?;
        return Ok(Flow::Continue);
    }

    let command = ctx.registry.resolve(topic)?;
    let (usage, text) = (command.usage().to_string(), command.help().to_string());
    ctx.println(usage)?;
    ctx.println(format!("    {}", text))?;
    Ok(Flow::Continue)
}
