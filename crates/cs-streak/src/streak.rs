/// Encodes a `±1` unit sequence into alternating signed run lengths.
///
/// The trailing run is always emitted, so `|streak|` sums to `units.len()`.
pub fn streak_lengths(units: &[i8]) -> Vec<i32> {
    let mut out = Vec::new();
    let Some(&first) = units.first() else {
        return out;
    };

    let mut prev = first;
    let mut acc = 0i32;
    for &u in units {
        debug_assert!(u == 1 || u == -1, "unit sequence must hold only +1/-1");
        if u != prev {
            out.push(acc);
            acc = 0;
        }
        acc += i32::from(u);
        prev = u;
    }
    out.push(acc);

    out
}

/// Running state of the bridged encoder's single forward scan.
#[derive(Debug)]
struct StreakState {
    prev: i8,
    acc: i32,
    skip: usize,
    out: Vec<i32>,
}

impl StreakState {
    fn new(first: i8) -> Self {
        Self {
            prev: first,
            acc: 0,
            skip: 0,
            out: Vec::new(),
        }
    }

    /// Closes the active run and starts a new one at `u`.
    fn close(&mut self, u: i8) {
        // A zero accumulator is never emitted as its own streak.
        if self.acc != 0 {
            self.out.push(self.acc);
        }
        self.acc = i32::from(u);
        self.prev = u;
    }

    fn finish(mut self) -> Vec<i32> {
        if self.acc != 0 {
            self.out.push(self.acc);
        }
        self.out
    }
}

/// Like [`streak_lengths`], but bridges short background gaps inside a
/// target run.
///
/// When a target (`+1`) run is interrupted, the next `gap_tolerance` pixels
/// after the interruption are searched for the farthest target pixel. If one
/// is found, the interruption and everything up to that pixel is folded into
/// the target run and skipped. Background runs are never extended this way.
///
/// With `gap_tolerance == 0` the output equals [`streak_lengths`].
pub fn streak_lengths_bridged(units: &[i8], gap_tolerance: usize) -> Vec<i32> {
    let Some(&first) = units.first() else {
        return Vec::new();
    };
    let last = units.len() - 1;
    let mut st = StreakState::new(first);

    for (i, &u) in units.iter().enumerate() {
        debug_assert!(u == 1 || u == -1, "unit sequence must hold only +1/-1");
        if st.skip > 0 {
            // Already counted by the look-ahead that armed the skip.
            st.skip -= 1;
            continue;
        }

        if u == st.prev {
            st.acc += i32::from(u);
            continue;
        }

        if st.acc > 0 {
            let window_end = i.saturating_add(gap_tolerance).min(last);
            if let Some(k) = units[i..=window_end].iter().rposition(|&v| v > 0) {
                st.acc += k as i32 + 1;
                st.skip = k;
                st.prev = 1;
                continue;
            }
        }

        st.close(u);
    }

    st.finish()
}
