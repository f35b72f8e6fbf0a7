//! Profile validation

use anyhow::Result;
use ctrlkit_pid::ControllerProfile;

use crate::commands::ValidateArgs;
use crate::error::CliError;
use crate::output;

pub fn execute(args: &ValidateArgs, json: bool) -> Result<()> {
    let path = args.profile.display().to_string();
    let profile = ControllerProfile::load(&args.profile)
        .map_err(|e| CliError::from_profile_load(&path, e))?;

    let checked = if args.incremental {
        profile.build_incremental().map(drop)
    } else {
        profile.validate()
    };

    match checked {
        Ok(()) => {
            output::print_validation(&path, &profile, json)?;
            Ok(())
        }
        Err(source) => Err(CliError::InvalidProfile { path, source }.into()),
    }
}
