// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wave Assigner
//!
//! | Movability | Complexity   | Wave |
//! |------------|--------------|------|
//! | Movable    | any          | 1    |
//! | NonMovable | Low, Medium  | 2    |
//! | NonMovable | High         | 3    |

use crate::domain::{Complexity, Movability, Wave};

/// Assign an item to a wave from its movability and its workspace's complexity
pub fn assign_wave(movability: Movability, complexity: Complexity) -> Wave {
    match (movability, complexity) {
        (Movability::Movable, _) => Wave::One,
        (Movability::NonMovable, Complexity::Low | Complexity::Medium) => Wave::Two,
        (Movability::NonMovable, Complexity::High) => Wave::Three,
    }
}

/// Workspace wave: the latest wave any of its items needs, Wave 1 when empty
pub fn workspace_wave<I>(item_waves: I) -> Wave
where
    I: IntoIterator<Item = Wave>,
{
    item_waves.into_iter().max().unwrap_or(Wave::One)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Movability::Movable, Complexity::Low => Wave::One)]
    #[test_case(Movability::Movable, Complexity::Medium => Wave::One)]
    #[test_case(Movability::Movable, Complexity::High => Wave::One)]
    #[test_case(Movability::NonMovable, Complexity::Low => Wave::Two)]
    #[test_case(Movability::NonMovable, Complexity::Medium => Wave::Two)]
    #[test_case(Movability::NonMovable, Complexity::High => Wave::Three)]
    fn test_decision_table(movability: Movability, complexity: Complexity) -> Wave {
        assign_wave(movability, complexity)
    }

    #[test]
    fn test_workspace_wave() {
        assert_eq!(workspace_wave(Vec::<Wave>::new()), Wave::One);
        assert_eq!(workspace_wave([Wave::One, Wave::Three, Wave::Two]), Wave::Three);
    }
}
