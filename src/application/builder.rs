use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use crate::api::handlers::ReadinessProbe;
use crate::api::middleware::{JwtClaimsResolver, JwtTokenIssuer};
use crate::api::router::AppState;
use crate::application::{
    ports::{
        ensure_bucket, BlobStore, ClaimsResolver, HomeDocumentStore, IdGenerator, PasswordHasher,
        TokenIssuer, UserStore,
    },
    use_cases::{
        CreateHomeUseCase, ListHomesUseCase, LoginUserUseCase, RegisterUserUseCase,
        UpdateHomeUseCase,
    },
    HomeRepository,
};
use crate::config::Config;
use crate::infrastructure::{
    identity::{Argon2PasswordHasher, ObjectIdGenerator},
    persistence::{InMemoryUserStore, PostgresHomeStore, PostgresUserStore},
    storage::S3BlobStore,
};

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    pool: Option<sqlx::PgPool>,
    documents: Option<Arc<dyn HomeDocumentStore>>,
    blobs: Option<Arc<dyn BlobStore>>,
    users: Option<Arc<dyn UserStore>>,
    ids: Option<Arc<dyn IdGenerator>>,
    claims_resolver: Option<Arc<dyn ClaimsResolver>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pool: None,
            documents: None,
            blobs: None,
            users: None,
            ids: None,
            claims_resolver: None,
        }
    }

    /// Initialize database connection pool with retry logic
    pub async fn with_database(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Connecting to database");

        // Retry connection with exponential backoff
        let mut retries = 3;
        let mut delay = Duration::from_secs(1);
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(self.config.db_max_connections)
                .min_connections(self.config.db_min_connections)
                .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
                .idle_timeout(Some(Duration::from_secs(self.config.db_idle_timeout_secs)))
                .max_lifetime(Some(Duration::from_secs(self.config.db_max_lifetime_secs)))
                .connect(&self.config.database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    warn!(
                        ?delay,
                        retries_left = retries,
                        error = %e,
                        "Database connection failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2; // Exponential backoff
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to connect to database after retries");
                    return Err(Box::new(e));
                }
            }
        };

        info!(
            max = self.config.db_max_connections,
            min = self.config.db_min_connections,
            "Database pool configured"
        );

        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to run migrations");
                e
            })?;

        self.pool = Some(pool);
        Ok(self)
    }

    /// Wire the Postgres document store and the S3 blob store
    pub async fn with_infrastructure(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = self.pool.as_ref().ok_or("Database pool not initialized")?;

        let documents: Arc<dyn HomeDocumentStore> =
            Arc::new(PostgresHomeStore::new(pool.clone()));
        let blobs: Arc<dyn BlobStore> = Arc::new(S3BlobStore::new(&self.config.s3()));

        // Creating the bucket up front is an optimisation; `set` ensures it anyway
        if let Err(e) = ensure_bucket(blobs.as_ref(), &self.config.photo_bucket).await {
            warn!(bucket = %self.config.photo_bucket, error = %e, "Photo bucket not ready at startup");
        }

        self.documents = Some(documents);
        self.blobs = Some(blobs);
        self.users = Some(Arc::new(PostgresUserStore::new(pool.clone())));

        info!("Infrastructure layer initialized");
        Ok(self)
    }

    /// Use the given stores instead of Postgres and S3
    pub fn with_stores(
        mut self,
        documents: Arc<dyn HomeDocumentStore>,
        blobs: Arc<dyn BlobStore>,
    ) -> Self {
        self.documents = Some(documents);
        self.blobs = Some(blobs);
        self
    }

    pub fn with_user_store(mut self, users: Arc<dyn UserStore>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn with_claims_resolver(mut self, resolver: Arc<dyn ClaimsResolver>) -> Self {
        self.claims_resolver = Some(resolver);
        self
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let documents = self.documents.ok_or("Document store not initialized")?;
        let blobs = self.blobs.ok_or("Blob store not initialized")?;
        let ids: Arc<dyn IdGenerator> = match self.ids {
            Some(ids) => ids,
            None => Arc::new(ObjectIdGenerator::new()),
        };
        let claims_resolver: Arc<dyn ClaimsResolver> = match self.claims_resolver {
            Some(resolver) => resolver,
            None => Arc::new(JwtClaimsResolver::new(&self.config.jwt_secret)),
        };

        let users: Arc<dyn UserStore> = match self.users {
            Some(users) => users,
            None => {
                warn!("No user store configured, accounts live in memory only");
                Arc::new(InMemoryUserStore::new())
            }
        };
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
        let tokens: Arc<dyn TokenIssuer> = Arc::new(JwtTokenIssuer::new(
            &self.config.jwt_secret,
            self.config.jwt_ttl_secs,
        ));

        let repository = Arc::new(HomeRepository::new(
            Arc::clone(&documents),
            Arc::clone(&blobs),
            ids,
            self.config.photo_bucket.clone(),
        ));

        let create_use_case = Arc::new(CreateHomeUseCase::new(Arc::clone(&repository)));
        let update_use_case = Arc::new(UpdateHomeUseCase::new(Arc::clone(&repository)));
        let list_use_case = Arc::new(ListHomesUseCase::new(Arc::clone(&repository)));
        let register_use_case = Arc::new(RegisterUserUseCase::new(
            Arc::clone(&users),
            Arc::clone(&hasher),
        ));
        let login_use_case = Arc::new(LoginUserUseCase::new(users, hasher, tokens));

        info!(bucket = %self.config.photo_bucket, "Application layer initialized");

        Ok(AppState {
            repository,
            create_use_case,
            update_use_case,
            list_use_case,
            register_use_case,
            login_use_case,
            claims_resolver,
            readiness: ReadinessProbe {
                documents,
                blobs,
                bucket: self.config.photo_bucket.clone(),
            },
            max_request_bytes: self.config.max_request_bytes,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
