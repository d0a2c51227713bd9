//! # IP address comparison
//!
//! Comparison of `ipv4_address` and `ipv6_address` values under an OVAL
//! operation. Values may carry a prefix (`10.0.0.0/8`, `fe80::/10`) and IPv4
//! values may also use a dotted netmask (`10.0.0.0/255.0.0.0`). A value
//! without a prefix is a host address (full-length prefix).
//!
//! Ordering operations compare the network addresses after each side is
//! masked with its own prefix. `subset of` / `superset of` test network
//! containment. Unparseable input or an operation that has no meaning for
//! addresses yields [`ResultVerdict::Error`].
//!
//! The session never calls these itself. They are building blocks for
//! [`CriteriaEvaluator`](crate::results::CriteriaEvaluator) implementations
//! that compare collected address items.

use super::operation::Operation;
use super::verdict::ResultVerdict;
use crate::log_debug;
use std::net::{Ipv4Addr, Ipv6Addr};

const IPV4_WIDTH: u8 = 32;
const IPV6_WIDTH: u8 = 128;

/// Parse an IPv4 address with optional `/prefix` or `/netmask`
pub fn parse_ipv4_network(value: &str) -> Option<(Ipv4Addr, u8)> {
    let (addr, prefix) = match value.split_once('/') {
        Some((addr, suffix)) => (addr, Some(suffix)),
        None => (value, None),
    };
    let addr: Ipv4Addr = addr.trim().parse().ok()?;

    let prefix = match prefix {
        None => IPV4_WIDTH,
        Some(suffix) if suffix.contains('.') => {
            let mask = u32::from(suffix.trim().parse::<Ipv4Addr>().ok()?);
            // Netmask must be contiguous leading ones
            if mask.leading_ones() + mask.trailing_zeros() != 32 {
                return None;
            }
            mask.leading_ones() as u8
        }
        Some(suffix) => {
            let prefix: u8 = suffix.trim().parse().ok()?;
            if prefix > IPV4_WIDTH {
                return None;
            }
            prefix
        }
    };

    Some((addr, prefix))
}

/// Parse an IPv6 address with optional `/prefix`
pub fn parse_ipv6_network(value: &str) -> Option<(Ipv6Addr, u8)> {
    let (addr, prefix) = match value.split_once('/') {
        Some((addr, suffix)) => (addr, Some(suffix)),
        None => (value, None),
    };
    let addr: Ipv6Addr = addr.trim().parse().ok()?;

    let prefix = match prefix {
        None => IPV6_WIDTH,
        Some(suffix) => {
            let prefix: u8 = suffix.trim().parse().ok()?;
            if prefix > IPV6_WIDTH {
                return None;
            }
            prefix
        }
    };

    Some((addr, prefix))
}

/// Compare two `ipv4_address` values
pub fn compare_ipv4(left: &str, right: &str, operation: Operation) -> ResultVerdict {
    match (parse_ipv4_network(left), parse_ipv4_network(right)) {
        (Some((a, a_prefix)), Some((b, b_prefix))) => compare_networks(
            (u32::from(a) as u128, a_prefix),
            (u32::from(b) as u128, b_prefix),
            IPV4_WIDTH,
            operation,
        ),
        _ => {
            log_debug!("Invalid IPv4 operand", "left" => left, "right" => right);
            ResultVerdict::Error
        }
    }
}

/// Compare two `ipv6_address` values
pub fn compare_ipv6(left: &str, right: &str, operation: Operation) -> ResultVerdict {
    match (parse_ipv6_network(left), parse_ipv6_network(right)) {
        (Some((a, a_prefix)), Some((b, b_prefix))) => compare_networks(
            (u128::from(a), a_prefix),
            (u128::from(b), b_prefix),
            IPV6_WIDTH,
            operation,
        ),
        _ => {
            log_debug!("Invalid IPv6 operand", "left" => left, "right" => right);
            ResultVerdict::Error
        }
    }
}

fn netmask(prefix: u8, width: u8) -> u128 {
    let full = if width == IPV6_WIDTH {
        u128::MAX
    } else {
        (1u128 << width) - 1
    };
    if prefix == 0 {
        0
    } else {
        (full << (width - prefix)) & full
    }
}

fn compare_networks(
    (a, a_prefix): (u128, u8),
    (b, b_prefix): (u128, u8),
    width: u8,
    operation: Operation,
) -> ResultVerdict {
    let verdict = |holds: bool| {
        if holds {
            ResultVerdict::True
        } else {
            ResultVerdict::False
        }
    };

    let a_net = a & netmask(a_prefix, width);
    let b_net = b & netmask(b_prefix, width);

    match operation {
        Operation::Equals => verdict(a == b && a_prefix == b_prefix),
        Operation::NotEqual => verdict(a != b || a_prefix != b_prefix),
        Operation::SubsetOf => {
            if a_prefix < b_prefix {
                return ResultVerdict::False;
            }
            let mask = netmask(b_prefix, width);
            verdict(a & mask == b & mask)
        }
        Operation::SupersetOf => {
            if a_prefix > b_prefix {
                return ResultVerdict::False;
            }
            let mask = netmask(a_prefix, width);
            verdict(a & mask == b & mask)
        }
        Operation::GreaterThan => verdict(a_net > b_net),
        Operation::GreaterThanOrEqual => verdict(a_net >= b_net),
        Operation::LessThan => verdict(a_net < b_net),
        Operation::LessThanOrEqual => verdict(a_net <= b_net),
        other => {
            log_debug!("Operation not supported for addresses", "operation" => other);
            ResultVerdict::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4_forms() {
        assert_eq!(
            parse_ipv4_network("192.168.1.10"),
            Some((Ipv4Addr::new(192, 168, 1, 10), 32))
        );
        assert_eq!(
            parse_ipv4_network("10.0.0.0/8"),
            Some((Ipv4Addr::new(10, 0, 0, 0), 8))
        );
        assert_eq!(
            parse_ipv4_network("10.0.0.0/255.255.0.0"),
            Some((Ipv4Addr::new(10, 0, 0, 0), 16))
        );
        assert_eq!(parse_ipv4_network("10.0.0.0/255.0.255.0"), None);
        assert_eq!(parse_ipv4_network("10.0.0.0/33"), None);
        assert_eq!(parse_ipv4_network("not-an-address"), None);
    }

    #[test]
    fn test_ipv4_equality_includes_prefix() {
        assert_eq!(
            compare_ipv4("10.1.2.3", "10.1.2.3", Operation::Equals),
            ResultVerdict::True
        );
        assert_eq!(
            compare_ipv4("10.1.2.3/24", "10.1.2.3", Operation::Equals),
            ResultVerdict::False
        );
        assert_eq!(
            compare_ipv4("10.1.2.3/24", "10.1.2.3", Operation::NotEqual),
            ResultVerdict::True
        );
    }

    #[test]
    fn test_ipv4_containment() {
        assert_eq!(
            compare_ipv4("192.168.1.77", "192.168.1.0/24", Operation::SubsetOf),
            ResultVerdict::True
        );
        assert_eq!(
            compare_ipv4("192.168.2.77", "192.168.1.0/24", Operation::SubsetOf),
            ResultVerdict::False
        );
        assert_eq!(
            compare_ipv4("192.168.0.0/16", "192.168.1.0/24", Operation::SupersetOf),
            ResultVerdict::True
        );
        assert_eq!(
            compare_ipv4("192.168.1.0/24", "192.168.0.0/16", Operation::SupersetOf),
            ResultVerdict::False
        );
        assert_eq!(
            compare_ipv4("0.0.0.0/0", "8.8.8.8", Operation::SupersetOf),
            ResultVerdict::True
        );
    }

    #[test]
    fn test_ipv4_ordering_masks_each_side() {
        assert_eq!(
            compare_ipv4("10.0.0.200/24", "10.0.0.1", Operation::GreaterThan),
            ResultVerdict::False
        );
        assert_eq!(
            compare_ipv4("10.0.1.0", "10.0.0.255", Operation::GreaterThan),
            ResultVerdict::True
        );
        assert_eq!(
            compare_ipv4("10.0.0.1", "10.0.0.1", Operation::LessThanOrEqual),
            ResultVerdict::True
        );
    }

    #[test]
    fn test_ipv6_compare() {
        assert_eq!(
            compare_ipv6("fe80::1", "fe80::/10", Operation::SubsetOf),
            ResultVerdict::True
        );
        assert_eq!(
            compare_ipv6("2001:db8::1", "2001:db8::1", Operation::Equals),
            ResultVerdict::True
        );
        assert_eq!(
            compare_ipv6("2001:db8::2", "2001:db8::1", Operation::LessThan),
            ResultVerdict::False
        );
        assert_eq!(
            compare_ipv6("::/0", "2001:db8::1", Operation::SupersetOf),
            ResultVerdict::True
        );
    }

    #[test]
    fn test_invalid_input_or_operation_is_error() {
        assert_eq!(
            compare_ipv4("10.0.0.1", "banana", Operation::Equals),
            ResultVerdict::Error
        );
        assert_eq!(
            compare_ipv6("fe80::1", "fe80::1/129", Operation::Equals),
            ResultVerdict::Error
        );
        assert_eq!(
            compare_ipv4("10.0.0.1", "10.0.0.1", Operation::PatternMatch),
            ResultVerdict::Error
        );
    }

    #[test]
    fn test_evaluator_compares_collected_address() {
        use crate::agent::AgentSession;
        use crate::content::{Definition, DefinitionModel, ObjectRef};
        use crate::syschar::SystemCharacteristics;
        use crate::test_support::{ScriptedCollector, FIXTURE_HREF};
        use std::sync::Arc;

        let model = DefinitionModel::new(
            vec![
                Definition::new("oval:ip:def:1", "inside").with_object(
                    ObjectRef::new("oval:ip:obj:1", "interface_object")
                        .with_parameter("address", "10.1.2.3"),
                ),
                Definition::new("oval:ip:def:2", "outside").with_object(
                    ObjectRef::new("oval:ip:obj:2", "interface_object")
                        .with_parameter("address", "172.16.0.1"),
                ),
            ],
            Vec::new(),
        )
        .unwrap();

        let evaluator = |definition: &Definition,
                         syschar: &SystemCharacteristics,
                         _: &DefinitionModel| {
            let address = syschar
                .object(&definition.objects[0].id)
                .and_then(|object| object.items.first())
                .and_then(|item| item.field("address"));
            match address {
                Some(address) => compare_ipv4(address, "10.0.0.0/8", Operation::SubsetOf),
                None => ResultVerdict::Unknown,
            }
        };

        let mut session = AgentSession::new(
            &model,
            FIXTURE_HREF,
            Arc::new(ScriptedCollector::new()),
            Arc::new(evaluator),
        )
        .unwrap();

        assert_eq!(session.evaluate_definition("oval:ip:def:1"), ResultVerdict::True);
        assert_eq!(session.evaluate_definition("oval:ip:def:2"), ResultVerdict::False);
    }
}
