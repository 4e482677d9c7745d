//! Parameters - タスク全体で共有される能力パラメータ
//!
//! estimator が参照するのは ambient power sink（待機中の消費電力モデル）だけです。
//! sink が未設定の場合、待機によるバッテリー消費は 0 として扱われます。

use std::sync::Arc;

use crate::ports::PowerSink;

/// Parameters はイベント見積もりに渡される共有パラメータ
#[derive(Clone, Default)]
pub struct Parameters {
    ambient_sink: Option<Arc<dyn PowerSink>>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// ambient power sink を設定した新しい Parameters を返す
    pub fn with_ambient_sink(self, sink: Arc<dyn PowerSink>) -> Self {
        Self {
            ambient_sink: Some(sink),
        }
    }

    pub fn ambient_sink(&self) -> Option<&Arc<dyn PowerSink>> {
        self.ambient_sink.as_ref()
    }
}

impl std::fmt::Debug for Parameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parameters")
            .field("ambient_sink", &self.ambient_sink.is_some())
            .finish()
    }
}
