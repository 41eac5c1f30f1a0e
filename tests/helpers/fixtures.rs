//! XML fixtures shared by the integration tests.

/// Three drugs covering products, targets, pathways, groups, interactions
/// and synonyms. The third drug has almost nothing.
pub const SAMPLE_EXPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<drugbank xmlns="http://www.drugbank.ca" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://www.drugbank.ca http://www.drugbank.ca/docs/drugbank.xsd" version="5.1">
  <drug type="biotech" created="2005-06-13" updated="2020-06-02">
    <drugbank-id primary="true">DB00001</drugbank-id>
    <drugbank-id>BTD00024</drugbank-id>
    <name>Lepirudin</name>
    <description>Lepirudin is identical to natural hirudin
except for substitution of leucine for isoleucine.</description>
    <state>liquid</state>
    <indication>For the treatment of heparin-induced thrombocytopenia</indication>
    <mechanism-of-action>Lepirudin forms a stable
non-covalent complex with alpha-thrombin.</mechanism-of-action>
    <food-interactions>Avoid herbs with anticoagulant activity.</food-interactions>
    <groups>
      <group>approved</group>
      <group>withdrawn</group>
    </groups>
    <synonyms>
      <synonym>Hirudin variant-1</synonym>
      <synonym>Lepirudin recombinant</synonym>
    </synonyms>
    <products>
      <product>
        <name>Refludan</name>
        <labeller>Bayer</labeller>
        <ndc-product-code>50419-150</ndc-product-code>
        <dosage-form>Powder, for solution</dosage-form>
        <strength>50 mg</strength>
        <route>Intravenous</route>
        <fda-application-number>BLA020807</fda-application-number>
        <ema-product-code></ema-product-code>
      </product>
      <product>
        <name>Refludan</name>
        <labeller>Celgene Europe Limited</labeller>
        <dosage-form>Injection, powder, for solution</dosage-form>
        <strength>20 mg</strength>
        <route>Intravenous</route>
        <fda-application-number></fda-application-number>
        <ema-product-code>EMEA/H/C/000122</ema-product-code>
      </product>
    </products>
    <pathways>
      <pathway>
        <smpdb-id>SMP0000278</smpdb-id>
        <name>Lepirudin Action Pathway</name>
        <category>drug_action</category>
        <drugs>
          <drug><drugbank-id>DB00001</drugbank-id><name>Lepirudin</name></drug>
          <drug><drugbank-id>DB01373</drugbank-id><name>Calcium</name></drug>
        </drugs>
      </pathway>
    </pathways>
    <drug-interactions>
      <drug-interaction>
        <drugbank-id>DB06605</drugbank-id>
        <name>Apixaban</name>
        <description>Apixaban may increase the anticoagulant activities of Lepirudin.</description>
      </drug-interaction>
    </drug-interactions>
    <targets>
      <target>
        <id>BE0000048</id>
        <name>Prothrombin</name>
        <polypeptide id="P00734" source="Swiss-Prot">
          <name>Prothrombin</name>
          <gene-name>F2</gene-name>
          <cellular-location>Secreted</cellular-location>
          <chromosome-location>11</chromosome-location>
          <external-identifiers>
            <external-identifier><resource>HUGO Gene Nomenclature Committee (HGNC)</resource><identifier>HGNC:3535</identifier></external-identifier>
            <external-identifier><resource>GenAtlas</resource><identifier>F2</identifier></external-identifier>
            <external-identifier><resource>UniProtKB</resource><identifier>P00734</identifier></external-identifier>
          </external-identifiers>
        </polypeptide>
      </target>
    </targets>
  </drug>
  <drug type="small molecule" created="2005-06-13" updated="2020-06-02">
    <drugbank-id primary="true">DB00006</drugbank-id>
    <name>Bivalirudin</name>
    <state>solid</state>
    <groups>
      <group>approved</group>
      <group>investigational</group>
    </groups>
    <products>
      <product><name>Angiomax</name><labeller>Sandoz</labeller></product>
    </products>
    <pathways>
      <pathway>
        <smpdb-id>SMP0000277</smpdb-id>
        <name>Bivalirudin Action Pathway</name>
        <category>drug_action</category>
        <drugs>
          <drug><drugbank-id>DB00006</drugbank-id><name>Bivalirudin</name></drug>
          <drug><drugbank-id>DB01373</drugbank-id><name>Calcium</name></drug>
        </drugs>
      </pathway>
    </pathways>
    <drug-interactions>
      <drug-interaction drugbank-id="DB00001" name="Lepirudin">
        <description>The risk of bleeding can be increased.</description>
      </drug-interaction>
    </drug-interactions>
    <targets>
      <target>
        <id>BE0000048</id>
        <polypeptide id="P00734" source="Swiss-Prot">
          <name>Prothrombin</name>
          <gene-name>f2</gene-name>
          <cellular-location>Secreted</cellular-location>
        </polypeptide>
      </target>
      <target>
        <id>BE0009999</id>
      </target>
    </targets>
  </drug>
  <drug type="small molecule">
    <drugbank-id primary="true">DB00010</drugbank-id>
    <name>Sermorelin</name>
  </drug>
</drugbank>
"#;

/// Two pathways sharing DrugA; DrugB and DrugC appear once each.
pub const PATHWAY_PAIR: &str = r#"<?xml version="1.0"?>
<drugbank xmlns="http://www.drugbank.ca">
  <drug>
    <pathways>
      <pathway>
        <smpdb-id>P001</smpdb-id>
        <name>P1</name>
        <category>Cat1</category>
        <drugs>
          <drug><drugbank-id>DB01</drugbank-id><name>DrugA</name></drug>
          <drug><drugbank-id>DB02</drugbank-id><name>DrugB</name></drug>
        </drugs>
      </pathway>
    </pathways>
  </drug>
  <drug>
    <pathways>
      <pathway>
        <smpdb-id>P002</smpdb-id>
        <name>P2</name>
        <category>Cat2</category>
        <drugs>
          <drug><drugbank-id>DB01</drugbank-id><name>DrugA</name></drug>
          <drug><drugbank-id>DB03</drugbank-id><name>DrugC</name></drug>
        </drugs>
      </pathway>
    </pathways>
  </drug>
</drugbank>
"#;

/// Prefixed namespace, identifiers `DB00007`, `DB00003` and a malformed one.
pub const GENERATOR_SOURCE: &str = r#"<?xml version="1.0"?>
<db:drugbank xmlns:db="http://www.drugbank.ca">
  <db:drug type="small molecule">
    <db:drugbank-id primary="true">DB00007</db:drugbank-id>
    <db:name>DrugOne</db:name>
    <db:description>Description One</db:description>
  </db:drug>
  <db:drug type="biotech">
    <db:drugbank-id primary="true">DB00003</db:drugbank-id>
    <db:name>DrugTwo</db:name>
    <db:description>Description Two</db:description>
    <db:state>solid</db:state>
  </db:drug>
  <db:drug type="small molecule">
    <db:drugbank-id primary="true">DBxx</db:drugbank-id>
    <db:name>DrugThree</db:name>
  </db:drug>
</db:drugbank>
"#;
