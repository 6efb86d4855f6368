//! Digital channel factories.

use tracing::debug;

use nidaqmx_sys::functions;

use super::{DiChannelCollection, DoChannelCollection};
use crate::channels::{DiChannel, DoChannel};
use crate::error::{check, Result};
use crate::marshal::{cstring, cstring_opt};
use crate::types::LineGrouping;
use crate::utils::assigned_channel_name;

impl DiChannelCollection {
    /// Create channels reading digital lines.
    ///
    /// With [`LineGrouping::ChannelPerLine`] each line in `lines` becomes
    /// its own virtual channel; with
    /// [`LineGrouping::ChannelForAllLines`] one channel covers them all.
    pub fn add_di_chan(
        &self,
        lines: &str,
        name_to_assign: Option<&str>,
        line_grouping: LineGrouping,
    ) -> Result<DiChannel> {
        let f = functions::CREATE_DI_CHAN.get()?;
        let lines_c = cstring(lines)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: signature matches the driver prototype; every string is
        // null-terminated and outlives the call.
        check(unsafe {
            f(
                self.task,
                lines_c.as_ptr(),
                name.as_ptr(),
                line_grouping.to_raw(),
            )
        })?;
        debug!(lines, "Created DI channel");
        let derived = match line_grouping {
            LineGrouping::ChannelPerLine => assigned_channel_name(lines, name_to_assign),
            LineGrouping::ChannelForAllLines => name_to_assign
                .filter(|n| !n.is_empty())
                .unwrap_or(lines)
                .to_string(),
        };
        Ok(DiChannel::new(self.task, derived))
    }
}

impl DoChannelCollection {
    /// Create channels driving digital lines.
    pub fn add_do_chan(
        &self,
        lines: &str,
        name_to_assign: Option<&str>,
        line_grouping: LineGrouping,
    ) -> Result<DoChannel> {
        let f = functions::CREATE_DO_CHAN.get()?;
        let lines_c = cstring(lines)?;
        let name = cstring_opt(name_to_assign)?;
        // SAFETY: as in `DiChannelCollection::add_di_chan`.
        check(unsafe {
            f(
                self.task,
                lines_c.as_ptr(),
                name.as_ptr(),
                line_grouping.to_raw(),
            )
        })?;
        debug!(lines, "Created DO channel");
        let derived = match line_grouping {
            LineGrouping::ChannelPerLine => assigned_channel_name(lines, name_to_assign),
            LineGrouping::ChannelForAllLines => name_to_assign
                .filter(|n| !n.is_empty())
                .unwrap_or(lines)
                .to_string(),
        };
        Ok(DoChannel::new(self.task, derived))
    }
}
