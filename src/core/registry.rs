//! # Component Registry - 싱글톤 컴포넌트 관리
//!
//! 게시판 백엔드의 리포지토리/서비스 싱글톤과 인프라 컴포넌트를 관리합니다.
//! 리포지토리와 서비스는 `singleton_macro`의 `#[repository]`, `#[service]` 속성으로
//! 선언되고, 매크로가 생성한 `new()`가 `Arc<T>` 필드를 이 모듈의
//! [`ServiceLocator::get`]으로 채웁니다.
//!
//! ## 구성 요소
//!
//! ### ServiceLocator
//! - **인프라 컨테이너**: `Database`, `RedisClient`, `LikeEventPublisher`처럼
//!   `main`에서 직접 생성되는 컴포넌트를 타입별로 보관합니다.
//! - **이름 기반 해석**: 보관되지 않은 `XxxRepository` / `XxxService` 타입은
//!   `inventory`로 수집된 등록 정보에서 `xxx` 이름으로 찾아 생성합니다.
//! - **순환 참조 감지**: 생성 중인 타입을 다시 요청하면 즉시 패닉합니다.
//!
//! ## 동작 흐름
//!
//! ```text
//! 1. 컴파일 타임
//!    └─ #[repository(name = "post", collection = "posts")]
//!         → RepositoryRegistration { name: "post_repository", constructor }
//!
//! 2. main
//!    ├─ ServiceLocator::set(database)
//!    ├─ ServiceLocator::set(redis_client)
//!    ├─ ServiceLocator::initialize_all()      (리포지토리 → 서비스 생성)
//!    └─ repositories::create_indexes()
//!
//! 3. 요청 처리
//!    └─ PostService::instance() → 캐시된 Arc<PostService>
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use singleton_macro::repository;
//!
//! #[repository(name = "comment", collection = "comments")]
//! pub struct CommentRepository {
//!     db: Arc<Database>,
//! }
//!
//! let repo = CommentRepository::instance();
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// `#[service]` 매크로가 적용된 구조체가 자동으로 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스의 등록 이름 (`post_service` 형태)
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// `#[repository]` 매크로가 적용된 구조체가 자동으로 구현합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 등록 이름 (`post_repository` 형태)
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션의 이름을 반환합니다.
    fn collection_name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보
///
/// `#[service]` 매크로가 생성하며 `inventory`로 수집됩니다.
pub struct ServiceRegistration {
    /// `{name}_service` 형태의 등록 이름
    pub name: &'static str,
    /// 싱글톤 인스턴스를 `Box<Arc<T>>`로 반환하는 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    /// `{name}_repository` 형태의 등록 이름
    pub name: &'static str,
    /// 싱글톤 인스턴스를 `Box<Arc<T>>`로 반환하는 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 정규화된 서비스 이름 → 등록 정보
static SERVICE_REGISTRY: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    inventory::iter::<ServiceRegistration>()
        .map(|registration| (registration_key(registration.name), registration))
        .collect()
});

/// 정규화된 리포지토리 이름 → 등록 정보
static REPOSITORY_REGISTRY: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    inventory::iter::<RepositoryRegistration>()
        .map(|registration| (registration_key(registration.name), registration))
        .collect()
});

/// 컴포넌트 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComponentKind {
    Repository,
    Service,
}

/// 등록 이름에서 접미사를 제거합니다: `post_repository` → `post`
fn registration_key(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 타입 이름에서 레지스트리 검색 키를 만듭니다: `PostRepository` → (Repository, `post`)
fn lookup_key(clean_type_name: &str) -> Option<(ComponentKind, String)> {
    if let Some(entity) = clean_type_name.strip_suffix("Repository") {
        return Some((ComponentKind::Repository, entity.to_lowercase()));
    }
    clean_type_name
        .strip_suffix("Service")
        .map(|entity| (ComponentKind::Service, entity.to_lowercase()))
}

thread_local! {
    /// 현재 스레드에서 생성 중인 타입 (순환 의존성 감지용)
    static INITIALIZING: RefCell<HashSet<TypeId>> = RefCell::new(HashSet::new());
}

/// 생성 중 표시를 해제하는 가드
///
/// 생성자가 패닉하더라도 표시가 남지 않도록 `Drop`에서 제거합니다.
struct InitializingGuard {
    type_id: TypeId,
}

impl InitializingGuard {
    fn enter(type_id: TypeId, clean_name: &str) -> Self {
        let inserted = INITIALIZING.with(|initializing| initializing.borrow_mut().insert(type_id));
        if !inserted {
            panic!("Circular dependency detected: {} is already being initialized", clean_name);
        }

        Self { type_id }
    }
}

impl Drop for InitializingGuard {
    fn drop(&mut self) {
        INITIALIZING.with(|initializing| {
            initializing.borrow_mut().remove(&self.type_id);
        });
    }
}

/// 컴포넌트 컨테이너
///
/// `main`에서 생성된 인프라 컴포넌트와, 한 번 해석된 리포지토리/서비스를
/// `TypeId` 기준으로 보관합니다. 각 타입당 하나의 인스턴스만 저장됩니다.
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 타입의 인스턴스를 가져옵니다.
    ///
    /// # Panics
    ///
    /// - `set()`으로 등록되지 않았고 매크로 등록 정보도 없는 타입
    /// - 생성 중인 타입을 다시 요청하는 순환 의존성
    ///
    /// 컴포넌트 구성은 서버 시작 시점에 모두 해석되므로 설정 오류로 취급합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        Self::try_get::<T>().unwrap_or_else(|| {
            panic!(
                "Component not registered: {}. Register it with ServiceLocator::set() or #[service]/#[repository] before use",
                Self::extract_clean_type_name(std::any::type_name::<T>())
            )
        })
    }

    /// 타입의 인스턴스를 가져오되, 등록된 적이 없으면 `None`을 반환합니다.
    ///
    /// 리포지토리/서비스 생성은 잠금 없이 수행되므로 생성자가 다른 컴포넌트를
    /// 요청해도 교착되지 않습니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let type_id = TypeId::of::<T>();

        if let Some(instance) = Self::cached::<T>(type_id) {
            return Some(instance);
        }

        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());
        let (kind, key) = lookup_key(&clean_name)?;

        let _guard = InitializingGuard::enter(type_id, &clean_name);

        let boxed = match kind {
            ComponentKind::Repository => (REPOSITORY_REGISTRY.get(&key)?.constructor)(),
            ComponentKind::Service => (SERVICE_REGISTRY.get(&key)?.constructor)(),
        };

        let instance = match boxed.downcast::<Arc<T>>() {
            Ok(instance) => *instance,
            Err(_) => panic!("Type mismatch for component: {} (registered as '{}')", clean_name, key),
        };

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let stored = instances
            .entry(type_id)
            .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>)
            .clone();

        stored.downcast::<T>().ok()
    }

    fn cached<T: 'static + Send + Sync>(type_id: TypeId) -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        instances
            .get(&type_id)
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 외부에서 생성된 인스턴스를 등록합니다.
    ///
    /// 같은 타입이 이미 등록되어 있으면 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        log::info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// `std::any::type_name`의 모듈 경로를 제거합니다.
    ///
    /// `board_service_backend::db::Database` → `Database`
    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }

    /// 등록된 모든 리포지토리와 서비스의 싱글톤을 미리 생성합니다.
    ///
    /// 리포지토리를 먼저, 서비스를 나중에 생성합니다. 인프라 컴포넌트가
    /// `set()`으로 등록되지 않았다면 이 단계에서 패닉합니다.
    pub fn initialize_all() {
        print_boxed_title("🔄 INITIALIZING BOARD COMPONENTS");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;
    use singleton_macro::service;

    struct MarkerComponent {
        value: u32,
    }

    struct NeverRegistered;

    #[service(name = "greeting")]
    struct GreetingService {}

    #[service(name = "welcome")]
    struct WelcomeService {
        greeting: Arc<GreetingService>,
    }

    #[test]
    fn test_set_and_get_returns_same_instance() {
        ServiceLocator::set(Arc::new(MarkerComponent { value: 7 }));

        let first = ServiceLocator::get::<MarkerComponent>();
        let second = ServiceLocator::get::<MarkerComponent>();

        assert_eq!(first.value, 7);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_try_get_missing_component() {
        assert!(ServiceLocator::try_get::<NeverRegistered>().is_none());
    }

    #[test]
    #[should_panic(expected = "Component not registered: NeverRegistered")]
    fn test_get_missing_component_panics() {
        let _ = ServiceLocator::get::<NeverRegistered>();
    }

    #[test]
    fn test_macro_service_resolves_its_dependencies() {
        let welcome = WelcomeService::instance();

        assert!(Arc::ptr_eq(&welcome.greeting, &GreetingService::instance()));
        assert!(Arc::ptr_eq(&welcome, &ServiceLocator::get::<WelcomeService>()));
        assert_eq!(Service::name(welcome.as_ref()), "welcome_service");
    }

    #[test]
    fn test_registration_and_lookup_keys_match() {
        assert_eq!(registration_key("post_repository"), "post");
        assert_eq!(registration_key("like_service"), "like");
        assert_eq!(registration_key("plain"), "plain");

        assert_eq!(lookup_key("PostRepository"), Some((ComponentKind::Repository, "post".to_string())));
        assert_eq!(lookup_key("LikeService"), Some((ComponentKind::Service, "like".to_string())));
        assert_eq!(lookup_key("LikeEventPublisher"), None);
    }

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("board_service_backend::db::Database"),
            "Database"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("Database"), "Database");
    }
}
