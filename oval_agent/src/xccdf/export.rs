//! Host identity facts exported into a policy test result

use super::error::BridgeError;
use super::result::{TargetFact, TestResult};
use crate::agent::AgentSession;
use crate::log_warning;
use crate::logging::codes;

impl AgentSession<'_> {
    /// Add the target host name, interface addresses and MAC facts to `record`
    pub fn export_sysinfo(&self, record: &mut TestResult) -> Result<(), BridgeError> {
        let Some(sysinfo) = self.system_characteristics().sysinfo() else {
            log_warning!(code = codes::SYSINFO_MISSING, "No system information to export",
                "session" => self.name()
            );
            return Err(BridgeError::MissingSysinfo {
                session: self.name().to_string(),
            });
        };

        record.add_target(sysinfo.primary_host_name.as_str());

        for interface in &sysinfo.interfaces {
            record.add_target_address(interface.ip_address.as_str());
            if let Some(mac) = &interface.mac_address {
                record.add_target_fact(TargetFact::string(
                    self.config().mac_fact_name.as_str(),
                    mac.as_str(),
                ));
            }
        }

        Ok(())
    }
}
