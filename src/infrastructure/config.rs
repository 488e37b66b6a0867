/// 問い合わせテーブル接続設定
use aws_sdk_dynamodb::Client as DynamoDbClient;

/// テーブル名を指定する環境変数
pub const CONTACTS_TABLE_ENV: &str = "CONTACTS_TABLE";

/// 環境変数が未設定の場合に使うテーブル名
pub const DEFAULT_CONTACTS_TABLE: &str = "oggeslambdatable";

/// DynamoDBクライアントと問い合わせテーブル名を持つ設定
///
/// テーブル名は環境変数`CONTACTS_TABLE`で上書きできる。
#[derive(Debug, Clone)]
pub struct ContactTableConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// 問い合わせテーブル名
    table_name: String,
}

impl ContactTableConfig {
    /// 環境変数とAWS設定から新しいContactTableConfigを作成
    ///
    /// 環境変数:
    /// - AWS認証情報: aws-configにより自動読み込み
    /// - CONTACTS_TABLE: 問い合わせ用DynamoDBテーブル名（省略時は`oggeslambdatable`）
    pub async fn from_env() -> Self {
        let table_name = Self::table_name_from_env();

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = DynamoDbClient::new(&aws_config);

        Self { client, table_name }
    }

    /// 環境変数からテーブル名を読み込み
    ///
    /// 未設定または空文字の場合はデフォルトのテーブル名を返す
    pub fn table_name_from_env() -> String {
        std::env::var(CONTACTS_TABLE_ENV)
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONTACTS_TABLE.to_string())
    }

    /// 明示的な値で新しいContactTableConfigを作成
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// 問い合わせテーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}
