use kubefind_types::KubernetesObject;

/// Append-only collection of fetched objects, kept in fetch order
#[derive(Clone, Debug, Default)]
pub struct ObjectStore {
    objects: Vec<KubernetesObject>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, object: KubernetesObject) {
        self.objects.push(object);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KubernetesObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<'a> IntoIterator for &'a ObjectStore {
    type Item = &'a KubernetesObject;
    type IntoIter = std::slice::Iter<'a, KubernetesObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
