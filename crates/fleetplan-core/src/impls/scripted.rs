//! ScriptedConfirmation - 固定回数で確認済みになる ConfirmationSource
//!
//! メッセージングを伴わない簡易変種です。announce が規定回数に達すると
//! 確認済みとして振る舞います。回数未指定なら永遠に未確認のままで、
//! 計画専用（I/O なし）のデフォルトとして使われます。

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::ports::{ChannelError, ConfirmationBackend, ConfirmationSource};

/// ScriptedConfirmation は announce 回数で確認を判定する供給源
pub struct ScriptedConfirmation {
    /// 確認済みになるまでに必要な announce 回数。None = 永遠に未確認
    confirm_after: Option<u32>,
    announced: AtomicU32,
}

impl ScriptedConfirmation {
    pub fn new(confirm_after: Option<u32>) -> Self {
        Self {
            confirm_after,
            announced: AtomicU32::new(0),
        }
    }

    /// これまでの announce 回数（観測用）
    pub fn announcements(&self) -> u32 {
        self.announced.load(Ordering::Relaxed)
    }
}

impl ConfirmationSource for ScriptedConfirmation {
    fn confirmed(&self) -> bool {
        match self.confirm_after {
            Some(n) => self.announced.load(Ordering::Acquire) >= n,
            None => false,
        }
    }

    fn announce(&self) -> Result<(), ChannelError> {
        self.announced.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}

/// ScriptedBackend は estimator ごとに ScriptedConfirmation を発行
#[derive(Debug, Clone, Copy)]
pub struct ScriptedBackend {
    confirm_after: Option<u32>,
}

impl ScriptedBackend {
    /// n 回の announce 後に確認済みになる backend
    pub fn confirm_after(n: u32) -> Self {
        Self {
            confirm_after: Some(n),
        }
    }

    /// 決して確認済みにならない backend（計画専用のデフォルト）
    pub fn never() -> Self {
        Self {
            confirm_after: None,
        }
    }
}

impl ConfirmationBackend for ScriptedBackend {
    fn open(&self) -> Arc<dyn ConfirmationSource> {
        Arc::new(ScriptedConfirmation::new(self.confirm_after))
    }
}
