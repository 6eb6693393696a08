//! Curated prompt collection and its block-level rendering
//!
//! [`build_document`] is the content model builder: a pure, total transform
//! from a [`PromptSet`] to an ordered [`Document`]. It has no external
//! dependencies and cannot fail. Each prompt entry maps deterministically to
//! a fixed sub-sequence of blocks: one heading, one code block holding the
//! prompt text verbatim, and, when the entry carries a rationale, one
//! callout. Empty separator paragraphs between groups exist purely for
//! remote rendering spacing.
//!
//! [`PromptSet::curated`] holds the fixed collection this tool exists to
//! publish; the prompt bodies are data, embedded untouched.

use crate::block::{Block, HeadingLevel};
use crate::document::Document;

/// One curated prompt: a title, the full prompt text, and an optional
/// rationale explaining why the prompt is effective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptEntry {
    pub title: String,
    pub body: String,
    pub rationale: Option<String>,
}

impl PromptEntry {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        PromptEntry {
            title: title.into(),
            body: body.into(),
            rationale: None,
        }
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }
}

/// The complete content of one published page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSet {
    /// Page title (rendered as the top-level heading).
    pub title: String,
    /// Creation timestamp, preformatted by the caller.
    pub timestamp: String,
    /// Overview text rendered as the opening callout.
    pub overview: String,
    /// Prompts aimed at deepening understanding; each carries a rationale.
    pub learning_prompts: Vec<PromptEntry>,
    /// Prompts for specific situations; no rationale attached.
    pub situational_prompts: Vec<PromptEntry>,
    /// Bulleted optimization guidance in the usage-notes section.
    pub optimization_points: Vec<String>,
    /// Bulleted ways to measure prompt effectiveness.
    pub measurement_methods: Vec<String>,
}

/// Render a prompt set as an ordered block sequence.
///
/// Deterministic: the same set always yields a structurally identical
/// document. Sections with no entries are omitted entirely.
pub fn build_document(set: &PromptSet) -> Document {
    let mut doc = Document::new();

    doc.push(Block::heading(HeadingLevel::H1, &set.title));
    doc.push(Block::paragraph(format!("作成日時: {}", set.timestamp)));
    doc.push(Block::separator());

    doc.push(Block::callout(&set.overview, "🚀"));
    doc.push(Block::separator());

    if !set.learning_prompts.is_empty() {
        doc.push(Block::heading(
            HeadingLevel::H2,
            "学習の理解を最大限深めるためのプロンプト例",
        ));
        for entry in &set.learning_prompts {
            push_entry(&mut doc, entry);
        }
    }

    if !set.situational_prompts.is_empty() {
        doc.push(Block::heading(HeadingLevel::H2, "特定場面でのプロンプト例"));
        for entry in &set.situational_prompts {
            push_entry(&mut doc, entry);
        }
    }

    if !set.optimization_points.is_empty() || !set.measurement_methods.is_empty() {
        doc.push(Block::heading(HeadingLevel::H2, "使用上の注意点"));

        if !set.optimization_points.is_empty() {
            doc.push(Block::heading(
                HeadingLevel::H3,
                "プロンプト最適化のポイント",
            ));
            for point in &set.optimization_points {
                doc.push(Block::paragraph(format!("• {point}")));
            }
            doc.push(Block::separator());
        }

        if !set.measurement_methods.is_empty() {
            doc.push(Block::heading(HeadingLevel::H3, "効果測定の方法"));
            for method in &set.measurement_methods {
                doc.push(Block::paragraph(format!("• {method}")));
            }
        }
    }

    doc
}

/// One entry renders as heading, verbatim code block, optional rationale
/// callout, then a spacing separator.
fn push_entry(doc: &mut Document, entry: &PromptEntry) {
    doc.push(Block::heading(HeadingLevel::H3, &entry.title));
    doc.push(Block::code(&entry.body));
    if let Some(rationale) = &entry.rationale {
        doc.push(Block::callout(format!("効果的な理由: {rationale}"), "💡"));
    }
    doc.push(Block::separator());
}

impl PromptSet {
    /// The curated Claude 4 coding-prompt collection.
    ///
    /// `timestamp` is injected by the caller so this stays a pure function
    /// of its arguments.
    pub fn curated(timestamp: impl Into<String>) -> Self {
        PromptSet {
            title: "Claude-4 Sonnet コーディング最適化プロンプト集".to_string(),
            timestamp: timestamp.into(),
            overview: "このプロンプト集は、Claude-4 Sonnetでコーディング時に最大のパフォーマンスを得るために設計されています。各プロンプトには効果的な理由と背景が含まれています。".to_string(),
            learning_prompts: vec![
                PromptEntry::new(
                    "1. コンテキスト豊富な技術解説プロンプト",
                    r#"このReactコンポーネントの実装について、以下の構造で詳細に説明してください：

<technical_analysis>
1. 使用されている技術とその選択理由
2. アーキテクチャパターンとその効果
3. パフォーマンス最適化の観点
4. 保守性・拡張性への配慮
5. 潜在的な改善点と代替アプローチ
</technical_analysis>

単なる機能説明ではなく、なぜこの実装が効果的なのか、他の選択肢と比較してどのような利点があるのかを、具体例とともに解説してください。現実のプロジェクトでこのパターンが有効になる場面も含めて教えてください。"#,
                )
                .with_rationale("Claude 4の「コンテキストを追加してパフォーマンスを向上させる」原則を活用。XML形式で構造化し、背景理由の説明を明示的に要求することで、表面的でない深い理解を促進します。"),
                PromptEntry::new(
                    "2. 並列思考による多角的分析プロンプト",
                    r#"以下のコードベースを複数の観点から同時に分析してください。各観点で独立して詳細な評価を行い、最後に統合的な見解を提示してください：

並列で以下を実行：
- セキュリティ観点での脆弱性分析
- パフォーマンス観点でのボトルネック特定
- 可読性・保守性の評価
- スケーラビリティの検証
- テスタビリティの確認

各分析で具体的な改善提案と、その改善がビジネス価値にどう貢献するかも含めて説明してください。分析結果を受け取った後、品質を慎重に検討し、最適な優先順位付けを行ってください。"#,
                )
                .with_rationale("並列ツール呼び出しの最適化原則と思考能力の活用を組み合わせ。複数観点での同時分析により、包括的な理解を効率的に得られます。"),
                PromptEntry::new(
                    "3. 実践的な問題解決フロープロンプト",
                    r#"このエラーやバグを以下のステップで段階的に解決し、各段階での学習ポイントを明確にしてください：

<problem_solving_flow>
1. **問題の本質特定**: 表面的な症状ではなく根本原因を探る
2. **デバッグ戦略立案**: 効率的な調査アプローチとツール選択
3. **解決策の複数案検討**: トレードオフを含めた比較評価
4. **実装とテスト**: 段階的な実装とバリデーション
5. **予防策の検討**: 同様の問題を未然に防ぐ仕組み
</problem_solving_flow>

各段階で「なぜこのアプローチを選んだのか」「他の選択肢と比べてどう優れているか」を具体的に説明し、将来同様の問題に遭遇した際の判断基準も教えてください。"#,
                )
                .with_rationale("明確で具体的な指示の原則を活用し、構造化された学習プロセスを提供。問題解決の思考過程を可視化することで、応用可能なスキルの習得を促進します。"),
                PromptEntry::new(
                    "4. アーキテクチャ設計思考プロンプト",
                    r#"以下の要件に対して、遠慮せずに全力でアーキテクチャ設計を行ってください。基本を超えて、プロダクションレディな完全な設計を作成してください：

<architecture_design_context>
要件: [具体的な要件を記載]
制約: [技術的・ビジネス的制約]
目標: [パフォーマンス、スケーラビリティ等の目標]
</architecture_design_context>

以下を含む包括的な設計を提示してください：
- アーキテクチャパターンの選択理由と代替案比較
- データフロー設計とその効率性の根拠
- 拡張性・保守性を考慮した構造設計
- セキュリティ・パフォーマンス要件への対応
- 技術選定の判断基準と将来性の考慮

設計判断の背景にある原理原則も詳しく解説し、チーム開発での合意形成に使える論理的根拠も提供してください。"#,
                )
                .with_rationale("「遠慮しないで全力を尽くす」というフロントエンド強化の原則をアーキテクチャ設計に応用。コンテキストと動機を明確にし、包括的な設計思考を促進します。"),
                PromptEntry::new(
                    "5. コードレビュー学習プロンプト",
                    r#"以下のコードに対して、シニアエンジニアの視点でコードレビューを実施してください。レビューは教育的観点を重視し、以下の形式で構造化してください：

<code_review_format>
【良い点の具体的評価】
- 優れた実装とその理由
- 採用されているベストプラクティス

【改善提案（優先度付き）】
- 高: セキュリティ・パフォーマンスに関わる重要な改善
- 中: 保守性・可読性の向上
- 低: より良い代替手法の提案

【学習ポイント】
- このコードから学べる設計原則
- 類似状況での応用方法
- 避けるべきアンチパターン
</code_review_format>

各提案について「なぜこの改善が重要なのか」「どのような利益をもたらすか」を具体例とともに説明し、コードの品質向上だけでなく、レビューを受ける開発者のスキル向上にも貢献する内容にしてください。"#,
                )
                .with_rationale("XML形式インジケータを使用し、教育的価値を最大化。コードレビューを単なる指摘ではなく、学習機会として活用する構造を提供します。"),
            ],
            situational_prompts: vec![
                PromptEntry::new(
                    "コードの理解度をチェックするためのプロンプト",
                    r#"私のコード理解度を段階的に評価してください。以下の質問に答えた後、理解度をチェックしてください：

<understanding_check>
1. **表面的理解**: このコードは何をしているか簡潔に説明してください
2. **構造理解**: 使用されているパターンやアーキテクチャを特定してください
3. **深層理解**: なぜこの実装方法が選ばれたのか、背景を推察してください
4. **応用理解**: 類似の問題に対してこの知識をどう応用しますか
5. **批判的思考**: この実装の限界や改善点をどう見つけますか
</understanding_check>

私の回答を受け取った後、各レベルでの理解度を評価し、不足している観点や誤解している部分を具体的に指摘してください。さらに理解を深めるための具体的な学習ステップも提案してください。"#,
                ),
                PromptEntry::new(
                    "ファイル構造のベストプラクティスについてのプロンプト",
                    r#"現在のプロジェクトのファイル構造について、以下の観点から包括的に分析し、ベストプラクティスとの比較評価を行ってください：

<file_structure_analysis>
1. **スケーラビリティ**: チームサイズや機能拡張への対応力
2. **保守性**: コードの発見可能性と変更の影響範囲の制御
3. **開発効率**: 開発者の認知負荷とワークフロー効率
4. **技術的合理性**: 使用技術のコンベンションとの整合性
5. **チーム協働**: 複数人開発での競合やマージ容易性
</file_structure_analysis>

各項目で具体的な改善提案を行い、「なぜその構造が推奨されるのか」の根拠を、実際のプロジェクト運用での具体例とともに説明してください。段階的なリファクタリング計画も含めて、実践的な移行戦略も提示してください。"#,
                ),
                PromptEntry::new(
                    "ファイルのアーキテクチャについて質問するときのプロンプト",
                    r#"以下のアーキテクチャについて、設計思想と実装の妥当性を多角的に検証してください。思考過程を可視化し、段階的に分析を深めてください：

<architecture_inquiry_context>
対象: [具体的なファイル・モジュール・システム名]
目的: [解決したい課題や疑問]
現状認識: [現在の理解レベルと疑問点]
</architecture_inquiry_context>

以下の順序で分析してください：
1. **アーキテクチャパターンの特定**: 採用されている設計パターンとその意図
2. **依存関係の分析**: モジュール間の結合度と凝集度の評価
3. **責務分散の検証**: 単一責任原則やレイヤー分離の適切性
4. **拡張性の評価**: 新機能追加や変更要求への対応力
5. **代替設計の検討**: 他のアプローチとの比較とトレードオフ

各分析で判断根拠を明確にし、「なぜこの設計が適切（または不適切）なのか」を、ソフトウェア工学の原則と実践的な運用観点の両方から説明してください。改善が必要な場合は、具体的なリファクタリングの手順も提示してください。"#,
                ),
            ],
            optimization_points: vec![
                "明確性: 曖昧な表現を避け、具体的な指示を心がける".to_string(),
                "構造化: XML形式やマークダウンで情報を整理する".to_string(),
                "コンテキスト: 背景情報と目的を明確に伝える".to_string(),
                "段階的: 複雑な作業は段階に分けて指示する".to_string(),
                "反復改善: レスポンスを受けて更なる詳細化を図る".to_string(),
            ],
            measurement_methods: vec![
                "理解度テスト: プロンプト使用前後での理解レベルの比較".to_string(),
                "コード品質: 生成されるコードの保守性・可読性の評価".to_string(),
                "学習効率: 同じ概念の習得にかかる時間の短縮度".to_string(),
                "応用力: 学んだ知識を異なる文脈で活用できるかの確認".to_string(),
            ],
        }
    }
}
