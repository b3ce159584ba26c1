use std::rc::Rc;

use super::{name_argument, MAKE_LIVEWIRE_TEST};
use crate::error::MakeError;
use crate::generator::{self, write_feature_test, DefaultGenerator};
use crate::host::{Command, CommandContext, CommandInput};
use crate::modules::resolve_module;

/// `make:livewire-test`: the feature test for a component
///
/// Honors `--module` the same way `make:livewire` does, so
/// `make:livewire --module=crm --test` puts the test under the module's
/// `tests/Feature/Livewire`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MakeLivewireTestCommand;

impl Command for MakeLivewireTestCommand {
    fn name(&self) -> &'static str {
        MAKE_LIVEWIRE_TEST
    }

    fn options(&self) -> &'static [&'static str] {
        &["module"]
    }

    fn handle(&self, input: &CommandInput, ctx: &mut CommandContext<'_>) -> Result<(), MakeError> {
        let services = Rc::clone(ctx.container.services());
        let module = resolve_module(&services.modules, input.option("module"))?;
        let name = name_argument(input)?;

        let base = DefaultGenerator::new(&services.config.livewire, &services.base_path);
        let generator = generator::select(module, &base);
        let component = generator.layout().component(name)?;

        let path = write_feature_test(&generator.test_layout(), &component)?;
        ctx.output
            .info(format!("Test [{}] created successfully.", path.display()));
        Ok(())
    }
}
