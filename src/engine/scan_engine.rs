// QualityScanEngine - 依存性注入による品質スキャンエンジン
// 索引構築、作業単位分割、並列評価、集約までを一括で管理する

use super::{cancellation::CancellationFlag, pipeline::ScanPipeline};
use crate::{
    core::{Dataset, ProgressReporter, ScanConfig, ScanError, ScanOutcome, ScanResult},
    image_loader::ImageLoaderBackend,
    index::{partition, AnnotationIndex},
    quality::{QualityEvaluator, QualityThresholds},
    services::NoOpProgressReporter,
};
use std::path::Path;
use std::sync::Arc;

/// 品質スキャンエンジン
///
/// ローダー・設定・レポーターはコンストラクタで注入され、
/// 並列処理で共有されるものは初期から`Arc`で保持する。
pub struct QualityScanEngine<L, C, R> {
    evaluator: Arc<QualityEvaluator<L>>,
    config: Arc<C>,
    reporter: Arc<R>,
}

impl<L, C, R> QualityScanEngine<L, C, R>
where
    L: ImageLoaderBackend + 'static,
    C: ScanConfig,
    R: ProgressReporter + 'static,
{
    /// 既定のしきい値でエンジンを作成
    pub fn new(loader: L, config: C, reporter: R) -> Self {
        Self::with_thresholds(loader, QualityThresholds::default(), config, reporter)
    }

    pub fn with_thresholds(
        loader: L,
        thresholds: QualityThresholds,
        config: C,
        reporter: R,
    ) -> Self {
        Self {
            evaluator: Arc::new(QualityEvaluator::with_thresholds(loader, thresholds)),
            config: Arc::new(config),
            reporter: Arc::new(reporter),
        }
    }

    /// データセット全体をスキャン
    pub async fn scan(&self, dataset: &Dataset, image_dir: &Path) -> ScanResult<ScanOutcome> {
        self.scan_with_cancellation(dataset, image_dir, CancellationFlag::new())
            .await
    }

    /// 中断フラグ付きでデータセット全体をスキャン
    ///
    /// 設定値と画像ディレクトリの検証に失敗した場合は、
    /// 評価を一切開始せずにエラーを返す。
    pub async fn scan_with_cancellation(
        &self,
        dataset: &Dataset,
        image_dir: &Path,
        cancel: CancellationFlag,
    ) -> ScanResult<ScanOutcome> {
        self.validate_setup(image_dir)?;

        let index = AnnotationIndex::build(&dataset.images, &dataset.annotations);
        let units = partition(&dataset.images, &index, image_dir);
        tracing::info!(
            images = index.image_count(),
            annotations = index.annotation_count(),
            workers = self.config.worker_count(),
            loader = self.evaluator.loader_name(),
            batch_size = self.config.batch_size(),
            "annotation index built"
        );

        let pipeline = ScanPipeline::new(Arc::clone(&self.evaluator));
        let outcome = if self.config.enable_progress_reporting() {
            pipeline
                .execute(units, self.config.as_ref(), Arc::clone(&self.reporter), cancel)
                .await?
        } else {
            pipeline
                .execute(
                    units,
                    self.config.as_ref(),
                    Arc::new(NoOpProgressReporter::new()),
                    cancel,
                )
                .await?
        };

        tracing::info!(
            status = ?outcome.status,
            evaluated = outcome.summary.evaluated_units,
            skipped = outcome.summary.skipped_units,
            failed = outcome.summary.failed_units,
            elapsed_ms = outcome.summary.elapsed_ms,
            "scan finished"
        );
        Ok(outcome)
    }

    /// 設定と画像ディレクトリの検証
    fn validate_setup(&self, image_dir: &Path) -> ScanResult<()> {
        if self.config.worker_count() == 0 {
            return Err(ScanError::configuration(
                "ワーカー数は1以上である必要があります",
            ));
        }

        if self.config.batch_size() == 0 {
            return Err(ScanError::configuration(
                "バッチサイズは1以上である必要があります",
            ));
        }

        if self.config.channel_buffer_size() == 0 {
            return Err(ScanError::configuration(
                "チャンネルバッファサイズは1以上である必要があります",
            ));
        }

        let display = image_dir.display().to_string();
        if !image_dir.exists() {
            return Err(ScanError::image_directory(display, "ディレクトリが存在しません"));
        }
        if !image_dir.is_dir() {
            return Err(ScanError::image_directory(display, "ディレクトリではありません"));
        }

        Ok(())
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        &self.config
    }

    /// レポーターへの参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn thresholds(&self) -> &QualityThresholds {
        self.evaluator.thresholds()
    }
}
