use crate::domain::model::{ComputationResult, FieldValues, InputField, Message, Number};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 輸入來源，每個提示一個回答；`None` 表示使用者取消
#[async_trait]
pub trait Prompter: Send + Sync {
    async fn prompt(&self, message: &str) -> Result<Option<String>>;
}

/// 一次執行只會顯示一則訊息
#[async_trait]
pub trait Display: Send + Sync {
    async fn show(&self, message: &Message) -> Result<()>;
}

pub trait DisplaySettings: Send + Sync {
    fn currency_symbol(&self) -> &str;
}

/// 單一練習：欄位、規則與公式
pub trait Exercise: Send + Sync {
    fn name(&self) -> &'static str;

    fn fields(&self) -> &[InputField];

    /// 欄位文字不是所需種類的數字時顯示
    fn parse_error_message(&self) -> &'static str;

    /// 數字違反業務規則時顯示
    fn domain_error_message(&self) -> &'static str;

    /// 回傳欄位值不被接受的原因
    fn check_domain(&self, _field: &InputField, _value: Number) -> Option<String> {
        None
    }

    fn compute(&self, values: &FieldValues) -> Result<ComputationResult>;

    /// 計算結果本身不可顯示時（例如溢位成無限大）回傳原因
    fn check_result(&self, _result: &ComputationResult) -> Option<String> {
        None
    }

    fn render(&self, result: &ComputationResult, settings: &dyn DisplaySettings) -> Result<String>;
}
