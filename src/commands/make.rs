use std::rc::Rc;

use super::{make_component, name_argument, MAKE_LIVEWIRE, MAKE_LIVEWIRE_TEST};
use crate::error::MakeError;
use crate::generator::DefaultGenerator;
use crate::host::{Command, CommandContext, CommandInput};

/// The application's own `make:livewire`
///
/// Writes into the directories named by the `livewire.*` configuration and
/// knows nothing about modules.
#[derive(Debug, Default, Clone, Copy)]
pub struct MakeLivewireCommand;

impl Command for MakeLivewireCommand {
    fn name(&self) -> &'static str {
        MAKE_LIVEWIRE
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["livewire:make"]
    }

    fn options(&self) -> &'static [&'static str] {
        &["force", "test"]
    }

    fn handle(&self, input: &CommandInput, ctx: &mut CommandContext<'_>) -> Result<(), MakeError> {
        let name = name_argument(input)?;
        let services = Rc::clone(ctx.container.services());
        let generator = DefaultGenerator::new(&services.config.livewire, &services.base_path)
            .force(input.flag("force"));

        make_component(&generator, name, &services.stubs, ctx)?;

        if input.flag("test") {
            ctx.call(
                MAKE_LIVEWIRE_TEST,
                &CommandInput::new().with_argument("name", name),
            )?;
        }
        Ok(())
    }
}
