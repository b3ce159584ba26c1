use std::rc::Rc;

use super::{make_component, name_argument, MAKE_LIVEWIRE, MAKE_LIVEWIRE_TEST};
use crate::error::MakeError;
use crate::generator::{self, DefaultGenerator};
use crate::host::{Command, CommandContext, CommandInput};
use crate::modules::resolve_module;

/// `make:livewire` with a `--module` option
///
/// Without `--module` it behaves exactly like the application's command.
/// With one, the component lands in the module's `src/Livewire` and
/// `resources/views/livewire` directories and the container's finder is
/// scoped to that module for the rest of the run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModularMakeLivewireCommand;

impl ModularMakeLivewireCommand {
    /// Call another command, carrying this invocation's `--module` along when
    /// the target understands it.
    ///
    /// # Errors
    ///
    /// Whatever the called command fails with.
    pub fn call(
        &self,
        own: &CommandInput,
        ctx: &mut CommandContext<'_>,
        name: &str,
        input: CommandInput,
    ) -> Result<(), MakeError> {
        let input = forward_module(own, ctx.console.find(name), input);
        ctx.call(name, &input)
    }
}

impl Command for ModularMakeLivewireCommand {
    fn name(&self) -> &'static str {
        MAKE_LIVEWIRE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["livewire:make"]
    }

    fn options(&self) -> &'static [&'static str] {
        &["module", "force", "test"]
    }

    fn handle(&self, input: &CommandInput, ctx: &mut CommandContext<'_>) -> Result<(), MakeError> {
        let services = Rc::clone(ctx.container.services());
        let module = resolve_module(&services.modules, input.option("module"))?;
        let name = name_argument(input)?;

        let base = DefaultGenerator::new(&services.config.livewire, &services.base_path)
            .force(input.flag("force"));
        let generator = generator::select(module, &base);

        if let Some(module) = module {
            tracing::info!(module = module.name(), component = name, "generating into module");
            ctx.container.scope_finder(generator.finder());
        }

        make_component(generator.as_ref(), name, &services.stubs, ctx)?;

        if input.flag("test") {
            self.call(
                input,
                ctx,
                MAKE_LIVEWIRE_TEST,
                CommandInput::new().with_argument("name", name),
            )?;
        }
        Ok(())
    }
}

/// Add `own`'s `--module` value to `input` when `target` declares a
/// `module` option.
///
/// Commands that know nothing about modules get `input` untouched.
pub fn forward_module(
    own: &CommandInput,
    target: Option<&dyn Command>,
    input: CommandInput,
) -> CommandInput {
    let Some(module) = own.option("module").filter(|m| !m.is_empty()) else {
        return input;
    };

    match target {
        Some(target) if target.accepts_option("module") => input.with_option("module", module),
        Some(target) => {
            tracing::debug!(command = target.name(), module, "target has no --module option; not forwarding");
            input
        }
        None => input,
    }
}
