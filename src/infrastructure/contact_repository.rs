/// DynamoDBに問い合わせレコードを保存するためのリポジトリ
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::ContactRecord;

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),
}

/// 問い合わせレコード永続化用トレイト
///
/// 実際のDynamoDBとテスト用モックを差し替えられるよう抽象化する。
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// レコードを無条件に保存する
    ///
    /// 同じ`timestamp`のレコードが既に存在する場合は上書きされる。
    ///
    /// # 戻り値
    /// * 成功時は`Ok(())`
    /// * 失敗時は`Err(RepositoryError)`
    async fn put(&self, record: &ContactRecord) -> Result<(), RepositoryError>;
}

/// ContactRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoContactRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// 問い合わせテーブル名
    table_name: String,
}

impl DynamoContactRepository {
    /// 新しいDynamoContactRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - 問い合わせテーブルの名前
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// レコードをDynamoDBアイテムに変換
    ///
    /// 全属性を文字列型（S）で保存する。`timestamp`がパーティションキー。
    pub fn to_item(record: &ContactRecord) -> HashMap<String, AttributeValue> {
        HashMap::from([
            (
                "timestamp".to_string(),
                AttributeValue::S(record.timestamp.clone()),
            ),
            ("name".to_string(), AttributeValue::S(record.name.clone())),
            ("email".to_string(), AttributeValue::S(record.email.clone())),
            (
                "message".to_string(),
                AttributeValue::S(record.message.clone()),
            ),
        ])
    }
}

#[async_trait]
impl ContactRepository for DynamoContactRepository {
    async fn put(&self, record: &ContactRecord) -> Result<(), RepositoryError> {
        // 条件式なしのPutItem（既存アイテムは上書き）
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(Self::to_item(record)))
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(e.to_string()))?;

        Ok(())
    }
}
