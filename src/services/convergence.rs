//! 列表收敛判断
//!
//! 纯函数，不依赖页面，发现循环每轮计数之后调用一次

use std::fmt;

/// 目标数量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetCount {
    Limited(usize),
    /// 不限数量，抓取全部可用结果
    Unbounded,
}

impl TargetCount {
    /// 命令行 `--total`：未给出或为 0 都视为不限
    pub fn from_total(total: Option<usize>) -> Self {
        match total {
            Some(n) if n > 0 => TargetCount::Limited(n),
            _ => TargetCount::Unbounded,
        }
    }

    pub fn reached_by(self, count: usize) -> bool {
        match self {
            TargetCount::Limited(n) => count >= n,
            TargetCount::Unbounded => false,
        }
    }

    /// 截取数量上限
    pub fn limit(self) -> Option<usize> {
        match self {
            TargetCount::Limited(n) => Some(n),
            TargetCount::Unbounded => None,
        }
    }
}

impl fmt::Display for TargetCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetCount::Limited(n) => write!(f, "{}", n),
            TargetCount::Unbounded => f.write_str("不限"),
        }
    }
}

/// 单轮判断结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// 还在增长，继续滚动
    Continue,
    /// 已达到目标数量，取前 target 个
    StopAtTarget,
    /// 两次计数相同，列表已稳定，取全部
    StopStabilized,
}

/// 先判断目标数量，再判断是否稳定
pub fn compare(previous: usize, current: usize, target: TargetCount) -> Decision {
    if target.reached_by(current) {
        Decision::StopAtTarget
    } else if current == previous {
        Decision::StopStabilized
    } else {
        Decision::Continue
    }
}

/// 停止原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    AtTarget,
    Stabilized,
    /// 超过发现阶段的最长时间
    TimedOut,
}

/// 发现循环的状态机：polling → converged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceState {
    Polling { previous: usize },
    Converged { reason: StopReason, count: usize },
}

impl Default for ConvergenceState {
    fn default() -> Self {
        ConvergenceState::Polling { previous: 0 }
    }
}

impl ConvergenceState {
    /// 输入一次计数，返回下一个状态；已收敛的状态保持不变
    pub fn observe(self, current: usize, target: TargetCount) -> Self {
        match self {
            ConvergenceState::Polling { previous } => match compare(previous, current, target) {
                Decision::Continue => ConvergenceState::Polling { previous: current },
                Decision::StopAtTarget => ConvergenceState::Converged {
                    reason: StopReason::AtTarget,
                    count: current,
                },
                Decision::StopStabilized => ConvergenceState::Converged {
                    reason: StopReason::Stabilized,
                    count: current,
                },
            },
            converged => converged,
        }
    }
}
