//! Verdict engine
//!
//! An ordered decision list over the total score and issue counts; the
//! first matching rule wins:
//!
//! | # | Condition | Verdict | Priority |
//! |---|-----------|---------|----------|
//! | 1 | total < 40 or any critical | DELETE | Critical |
//! | 2 | no critical and warnings >= 3 | UPGRADE | High |
//! | 3 | total < 60 | UPGRADE | Medium |
//! | 4 | total >= 80, no critical, warnings <= 1 | KEEP | Low |
//! | 5 | otherwise | UPGRADE | Medium |
//!
//! Rules 3 and 5 overlap for some inputs. They are kept as separate rules
//! so the evaluation order stays exactly as listed.

use crate::models::{Issue, IssueCounts, Priority, Verdict};

const DELETE_BELOW: u32 = 40;
const UPGRADE_BELOW: u32 = 60;
const KEEP_AT_OR_ABOVE: u32 = 80;
const MANY_WARNINGS: usize = 3;
const KEEP_MAX_WARNINGS: usize = 1;

/// Derive verdict and priority from a total score and the issue list
pub fn determine_verdict(total: u32, issues: &[Issue]) -> (Verdict, Priority) {
    let counts = IssueCounts::from_issues(issues);
    let critical = counts.critical;
    let warnings = counts.warning;

    if total < DELETE_BELOW || critical > 0 {
        (Verdict::Delete, Priority::Critical)
    } else if critical == 0 && warnings >= MANY_WARNINGS {
        (Verdict::Upgrade, Priority::High)
    } else if total < UPGRADE_BELOW {
        (Verdict::Upgrade, Priority::Medium)
    } else if total >= KEEP_AT_OR_ABOVE && critical == 0 && warnings <= KEEP_MAX_WARNINGS {
        (Verdict::Keep, Priority::Low)
    } else {
        (Verdict::Upgrade, Priority::Medium)
    }
}
