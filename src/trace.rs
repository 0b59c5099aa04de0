use std::cell::RefCell;

// Define a struct to hold the flags
#[derive(Debug, Default, Clone, Copy)]
pub struct Flags {
    pub v_option: bool,
    pub q_option: bool,
}

// Define a thread-local variable to hold the flags
thread_local!(pub static TFLAGS: RefCell<Flags> = RefCell::new(Flags::default()));

// When set, trace lines are collected here instead of going to stdout
thread_local!(static TCAPTURE: RefCell<Option<Vec<String>>> = RefCell::new(None));

pub fn set_flags(flags: Flags) {
    TFLAGS.with(|tflags| {
        *tflags.borrow_mut() = flags;
    });
}

pub fn flags() -> Flags {
    TFLAGS.with(|tflags| *tflags.borrow())
}

#[doc(hidden)]
pub fn emit(line: String) {
    let line = TCAPTURE.with(|capture| match capture.borrow_mut().as_mut() {
        Some(lines) => {
            lines.push(line);
            None
        }
        None => Some(line),
    });
    if let Some(line) = line {
        println!("{}", line);
    }
}

/// Runs `f` with `flags` enabled and returns the trace lines it produced.
/// The previous flags are restored afterwards.
pub fn capture<R>(flags: Flags, f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let previous = self::flags();
    set_flags(flags);
    TCAPTURE.with(|capture| *capture.borrow_mut() = Some(Vec::new()));

    let result = f();

    let lines = TCAPTURE.with(|capture| capture.borrow_mut().take().unwrap_or_default());
    set_flags(previous);
    (result, lines)
}

// prints every leg of head movement
#[macro_export]
macro_rules! v_trace {
    ($($arg:tt)*) => {
        if $crate::trace::TFLAGS.with(|tflags| tflags.borrow().v_option) {
            $crate::trace::emit(format!($($arg)*));
        }
    };
}

// prints the partitions
#[macro_export]
macro_rules! q_trace {
    ($($arg:tt)*) => {
        if $crate::trace::TFLAGS.with(|tflags| tflags.borrow().q_option) {
            $crate::trace::emit(format!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_off_and_can_be_set() {
        assert!(!flags().v_option);
        assert!(!flags().q_option);

        set_flags(Flags {
            v_option: true,
            q_option: false,
        });
        assert!(flags().v_option);
        assert!(!flags().q_option);

        set_flags(Flags::default());
        assert!(!flags().v_option);
    }

    #[test]
    fn disabled_traces_emit_nothing() {
        let (_, lines) = capture(Flags::default(), || {
            v_trace!("leg {}", 1);
            q_trace!("queue {}", 2);
        });
        assert!(lines.is_empty());
    }

    #[test]
    fn each_macro_follows_its_own_flag() {
        let only_v = Flags {
            v_option: true,
            q_option: false,
        };
        let (_, lines) = capture(only_v, || {
            v_trace!("leg {}", 1);
            q_trace!("queue {}", 2);
        });
        assert_eq!(lines, vec!["leg 1"]);

        let only_q = Flags {
            v_option: false,
            q_option: true,
        };
        let (_, lines) = capture(only_q, || {
            v_trace!("leg {}", 1);
            q_trace!("queue {}", 2);
        });
        assert_eq!(lines, vec!["queue 2"]);
    }

    #[test]
    fn capture_restores_previous_flags() {
        set_flags(Flags::default());
        let all = Flags {
            v_option: true,
            q_option: true,
        };
        let (inside, _) = capture(all, flags);
        assert!(inside.v_option && inside.q_option);
        assert!(!flags().v_option && !flags().q_option);
    }
}
