/// Linear completion percentage for a position in the flow.
///
/// `round(100 * (current_index + 1) / total_steps)`, rounding halves up.
/// Only the last step reports 100; very long flows cap earlier steps at 99.
pub fn progress_percent(current_index: usize, total_steps: usize) -> u8 {
    if total_steps == 0 {
        return 0;
    }
    let position = (current_index + 1).min(total_steps);
    let percent = (200 * position + total_steps) / (2 * total_steps);
    if position < total_steps {
        percent.min(99) as u8
    } else {
        100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_step_flow() {
        let values: Vec<u8> = (0..5).map(|i| progress_percent(i, 5)).collect();
        assert_eq!(values, vec![20, 40, 60, 80, 100]);
    }

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(progress_percent(0, 3), 33);
        assert_eq!(progress_percent(1, 3), 67);
        assert_eq!(progress_percent(2, 3), 100);
        assert_eq!(progress_percent(0, 8), 13);
    }

    #[test]
    fn monotonic_and_full_only_at_last_step() {
        for total in 1..=12 {
            let mut last = 0;
            for idx in 0..total {
                let p = progress_percent(idx, total);
                assert!(p >= last);
                assert_eq!(p == 100, idx == total - 1, "total {total} idx {idx}");
                last = p;
            }
        }
    }

    #[test]
    fn long_flows_reserve_full_progress_for_last_step() {
        assert_eq!(progress_percent(199, 201), 99);
        assert_eq!(progress_percent(200, 201), 100);
    }

    #[test]
    fn empty_flow_has_no_progress() {
        assert_eq!(progress_percent(0, 0), 0);
    }
}
